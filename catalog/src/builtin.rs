//! Bee table bundled with the planner.

use hive_planner_core::{BeeColor, BeeRarity};

/// Slug, display name, rarity and colour of every bundled bee in catalog order.
pub(crate) const BUILTIN_BEES: [(&str, &str, BeeRarity, BeeColor); 46] = [
    ("basic-bee", "Basic Bee", BeeRarity::Common, BeeColor::Colorless),
    ("bomber-bee", "Bomber Bee", BeeRarity::Rare, BeeColor::Red),
    ("brave-bee", "Brave Bee", BeeRarity::Rare, BeeColor::Red),
    ("bumble-bee", "Bumble Bee", BeeRarity::Rare, BeeColor::Blue),
    ("cool-bee", "Cool Bee", BeeRarity::Rare, BeeColor::Blue),
    ("hasty-bee", "Hasty Bee", BeeRarity::Rare, BeeColor::Colorless),
    ("looker-bee", "Looker Bee", BeeRarity::Rare, BeeColor::Colorless),
    ("rad-bee", "Rad Bee", BeeRarity::Rare, BeeColor::Red),
    ("rascal-bee", "Rascal Bee", BeeRarity::Rare, BeeColor::Colorless),
    ("stubborn-bee", "Stubborn Bee", BeeRarity::Rare, BeeColor::Colorless),
    ("bubble-bee", "Bubble Bee", BeeRarity::Epic, BeeColor::Blue),
    ("bucko-bee", "Bucko Bee", BeeRarity::Epic, BeeColor::Blue),
    ("commander-bee", "Commander Bee", BeeRarity::Epic, BeeColor::Colorless),
    ("demo-bee", "Demo Bee", BeeRarity::Epic, BeeColor::Red),
    ("exhausted-bee", "Exhausted Bee", BeeRarity::Epic, BeeColor::Colorless),
    ("fire-bee", "Fire Bee", BeeRarity::Epic, BeeColor::Red),
    ("frosty-bee", "Frosty Bee", BeeRarity::Epic, BeeColor::Blue),
    ("honey-bee", "Honey Bee", BeeRarity::Epic, BeeColor::Colorless),
    ("rage-bee", "Rage Bee", BeeRarity::Epic, BeeColor::Red),
    ("riley-bee", "Riley Bee", BeeRarity::Epic, BeeColor::Red),
    ("shocked-bee", "Shocked Bee", BeeRarity::Epic, BeeColor::Colorless),
    ("baby-bee", "Baby Bee", BeeRarity::Legendary, BeeColor::Colorless),
    ("carpenter-bee", "Carpenter Bee", BeeRarity::Legendary, BeeColor::Colorless),
    ("demon-bee", "Demon Bee", BeeRarity::Legendary, BeeColor::Red),
    ("diamond-bee", "Diamond Bee", BeeRarity::Legendary, BeeColor::Blue),
    ("lion-bee", "Lion Bee", BeeRarity::Legendary, BeeColor::Red),
    ("music-bee", "Music Bee", BeeRarity::Legendary, BeeColor::Colorless),
    ("ninja-bee", "Ninja Bee", BeeRarity::Legendary, BeeColor::Blue),
    ("shy-bee", "Shy Bee", BeeRarity::Legendary, BeeColor::Colorless),
    ("buoyant-bee", "Buoyant Bee", BeeRarity::Mythic, BeeColor::Colorless),
    ("fuzzy-bee", "Fuzzy Bee", BeeRarity::Mythic, BeeColor::Colorless),
    ("precise-bee", "Precise Bee", BeeRarity::Mythic, BeeColor::Colorless),
    ("spicy-bee", "Spicy Bee", BeeRarity::Mythic, BeeColor::Red),
    ("tadpole-bee", "Tadpole Bee", BeeRarity::Mythic, BeeColor::Blue),
    ("vector-bee", "Vector Bee", BeeRarity::Mythic, BeeColor::Colorless),
    ("bear-bee", "Bear Bee", BeeRarity::Event, BeeColor::Colorless),
    ("cobalt-bee", "Cobalt Bee", BeeRarity::Event, BeeColor::Blue),
    ("crimson-bee", "Crimson Bee", BeeRarity::Event, BeeColor::Red),
    ("digital-bee", "Digital Bee", BeeRarity::Event, BeeColor::Colorless),
    ("festive-bee", "Festive Bee", BeeRarity::Event, BeeColor::Red),
    ("gummy-bee", "Gummy Bee", BeeRarity::Event, BeeColor::Colorless),
    ("photon-bee", "Photon Bee", BeeRarity::Event, BeeColor::Colorless),
    ("puppy-bee", "Puppy Bee", BeeRarity::Event, BeeColor::Colorless),
    ("tabby-bee", "Tabby Bee", BeeRarity::Event, BeeColor::Colorless),
    ("vicious-bee", "Vicious Bee", BeeRarity::Event, BeeColor::Colorless),
    ("windy-bee", "Windy Bee", BeeRarity::Event, BeeColor::Colorless),
];
