use std::fmt::Write as _;

use hive_planner_catalog::{BeeRecord, Catalog};
use hive_planner_core::{BeeColor, BeeRarity, Event, HiveSlot, LayoutSnapshot, SavedConfig};
use hive_planner_system_stats::HiveStats;

const HIVE_COLUMNS: usize = 5;
const CELL_WIDTH: usize = 18;
const EMPTY_CELL: &str = ".";

/// Renders the layout as a five by five grid of labelled cells.
pub(crate) fn hive(layout: &LayoutSnapshot, catalog: &Catalog) -> String {
    let mut output = String::new();
    for (row_index, slots) in layout.slots().chunks(HIVE_COLUMNS).enumerate() {
        for (column, slot) in slots.iter().enumerate() {
            let index = row_index * HIVE_COLUMNS + column;
            let cell = format!("{index:>2} {}", cell_label(slot, catalog));
            let _ = write!(output, "{cell:<CELL_WIDTH$}");
        }
        let trimmed = output.trim_end().len();
        output.truncate(trimmed);
        output.push('\n');
    }
    output
}

fn cell_label(slot: &HiveSlot, catalog: &Catalog) -> String {
    let Some(bee) = slot.occupant() else {
        return EMPTY_CELL.to_owned();
    };

    let name = catalog
        .resolve(bee.as_str())
        .map_or(bee.as_str(), |record| record.name.as_str());
    let short = name.strip_suffix(" Bee").unwrap_or(name);
    let marker = if slot.is_gifted() { "*" } else { "" };
    format!("{marker}{short} {}", slot.level())
}

/// Renders a list of catalog records, one per line.
pub(crate) fn bees<'a>(records: impl IntoIterator<Item = &'a BeeRecord>) -> String {
    let mut output = String::new();
    for record in records {
        let _ = writeln!(
            output,
            "{:<16} {:<18} {:<10} {}",
            record.slug.as_str(),
            record.name,
            record.rarity.as_str(),
            record.color.as_str()
        );
    }
    output
}

/// Renders the composition summary of a hive.
pub(crate) fn stats(stats: &HiveStats) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "bees {}/{}  gifted {}",
        stats.total(),
        hive_planner_core::HIVE_SLOT_COUNT,
        stats.gifted()
    );

    let colors: Vec<String> = BeeColor::ALL
        .into_iter()
        .map(|color| format!("{} {}", color.as_str(), stats.color(color)))
        .collect();
    let _ = writeln!(output, "{}", colors.join("  "));

    let rarities: Vec<String> = BeeRarity::ALL
        .into_iter()
        .filter(|rarity| stats.rarity(*rarity) > 0)
        .map(|rarity| format!("{} {}", rarity.as_str(), stats.rarity(rarity)))
        .collect();
    if !rarities.is_empty() {
        let _ = writeln!(output, "{}", rarities.join("  "));
    }
    output
}

/// Describes session events, one line each.
pub(crate) fn events(events: &[Event]) -> String {
    if events.is_empty() {
        return String::from("nothing changed\n");
    }

    let mut output = String::new();
    for event in events {
        let _ = match event {
            Event::BeePlaced { slot, bee } => writeln!(output, "placed {bee} in slot {slot}"),
            Event::BeeMoved { from, to } => writeln!(output, "moved slot {from} to slot {to}"),
            Event::SlotsSwapped { from, to } => writeln!(output, "swapped slots {from} and {to}"),
            Event::BeeRemoved { slot, bee } => writeln!(output, "removed {bee} from slot {slot}"),
            Event::GiftedToggled { slot, gifted: true } => {
                writeln!(output, "slot {slot} is now gifted")
            }
            Event::GiftedToggled {
                slot,
                gifted: false,
            } => writeln!(output, "slot {slot} is no longer gifted"),
            Event::HiveCleared => writeln!(output, "cleared the hive"),
            Event::LevelsChanged { level, slots } => {
                writeln!(output, "set {} bees to level {level}", slots.len())
            }
            Event::LayoutImported => writeln!(output, "imported layout"),
            Event::Undone => writeln!(output, "undone"),
            Event::Redone => writeln!(output, "redone"),
            Event::HistoryCleared => writeln!(output, "history cleared"),
        };
    }
    output
}

/// Renders saved configurations in save order.
pub(crate) fn saved_configs(configs: &[SavedConfig]) -> String {
    if configs.is_empty() {
        return String::from("no saved configurations\n");
    }

    let mut output = String::new();
    for config in configs {
        let _ = writeln!(
            output,
            "{}  {}  (saved at {})",
            config.id, config.name, config.created_at
        );
    }
    output
}
