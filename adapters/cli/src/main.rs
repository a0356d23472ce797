#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for planning Hive Planner bee layouts.

mod config;
mod planner;
mod render;
mod shell;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hive_planner_catalog::BeeRecord;
use hive_planner_core::{BeeColor, BeeRarity, Command, Event, Level, SlotIndex};
use hive_planner_storage::{FileStore, KeyValueStore, LayoutStore};
use hive_planner_system_bootstrap::Bootstrap;
use hive_planner_system_builder::{BuilderInput, DragSource, PlacementDefaults};
use hive_planner_system_layout_codec as layout_codec;

use crate::{config::PlannerConfig, planner::Planner};

#[derive(Debug, Parser)]
#[command(name = "hive-planner", version, about = "Plan and share bee hive layouts")]
struct Cli {
    /// Configuration file; defaults to `hive-planner.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the live layout and saved configurations.
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,
    /// Number of undo steps kept by the shell.
    #[arg(long, global = true)]
    max_history: Option<usize>,
    /// Level given to newly placed bees.
    #[arg(long, global = true, allow_negative_numbers = true)]
    default_level: Option<i64>,
    /// Place new bees as gifted.
    #[arg(long, global = true)]
    gifted: bool,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// List catalog bees.
    Bees {
        /// Case-insensitive text matched against name, rarity and colour.
        #[arg(long)]
        search: Option<String>,
        /// Only list bees of this rarity.
        #[arg(long, value_parser = parse_rarity)]
        rarity: Option<BeeRarity>,
        /// Only list bees of this colour.
        #[arg(long, value_parser = parse_color)]
        color: Option<BeeColor>,
    },
    /// Print the live hive, or the hive encoded in a share token.
    Show {
        /// Share token to render instead of the live hive.
        #[arg(long)]
        token: Option<String>,
    },
    /// Print the share token of the live hive.
    Share,
    /// Summarise the live hive by colour, rarity and gifted bees.
    Stats,
    /// Replace the live hive with a shared layout.
    Import {
        /// Share token to adopt.
        token: String,
    },
    /// Start an interactive editing session.
    Shell {
        /// Share token to start from instead of the persisted hive.
        #[arg(long)]
        share: Option<String>,
    },
    /// Place a catalog bee into a slot.
    Place {
        /// Bee slug or name.
        bee: String,
        /// Slot receiving the bee.
        #[arg(value_parser = shell::parse_slot)]
        slot: SlotIndex,
    },
    /// Move a bee, swapping with the target's occupant.
    Move {
        /// Slot the bee is taken from.
        #[arg(value_parser = shell::parse_slot)]
        from: SlotIndex,
        /// Slot the bee is dropped onto.
        #[arg(value_parser = shell::parse_slot)]
        to: SlotIndex,
    },
    /// Empty a slot.
    Remove {
        /// Slot to empty.
        #[arg(value_parser = shell::parse_slot)]
        slot: SlotIndex,
    },
    /// Toggle the gifted flag of a slot.
    Gift {
        /// Slot whose bee is toggled.
        #[arg(value_parser = shell::parse_slot)]
        slot: SlotIndex,
    },
    /// Empty every slot.
    Clear,
    /// Set the level of every placed bee.
    Level {
        /// New level, clamped between 1 and 25.
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Store the live hive under a name.
    Save {
        /// Display name of the configuration.
        name: String,
    },
    /// List saved configurations.
    Saved,
    /// Replace the live hive with a saved configuration.
    Load {
        /// Identifier printed by `saved`.
        id: String,
    },
    /// Delete a saved configuration.
    Delete {
        /// Identifier printed by `saved`.
        id: String,
    },
}

/// Entry point for the Hive Planner command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = PlannerConfig::load(cli.config.as_deref())?;
    if let Some(storage_dir) = cli.storage_dir {
        config.storage_dir = storage_dir;
    }
    if let Some(max_history) = cli.max_history {
        config.max_history = max_history;
    }
    if let Some(level) = cli.default_level {
        config.default_level = level;
    }
    config.place_as_gifted |= cli.gifted;

    run(cli.command, &config)
}

fn run(command: Option<CliCommand>, config: &PlannerConfig) -> Result<()> {
    let catalog = config.catalog()?;
    let share = match &command {
        Some(CliCommand::Shell { share }) => share.clone(),
        _ => None,
    };
    let mut planner = Planner::open(
        catalog,
        LayoutStore::new(FileStore::new(&config.storage_dir)),
        PlacementDefaults::new(config.place_as_gifted, config.level()),
        config.max_history,
        share.as_deref(),
    );

    let Some(command) = command else {
        println!("{}", Bootstrap.welcome_banner());
        print!("{}", render::hive(planner.layout(), planner.catalog()));
        return Ok(());
    };

    match command {
        CliCommand::Bees {
            search,
            rarity,
            color,
        } => print!("{}", render::bees(list_bees(&planner, search, rarity, color))),
        CliCommand::Show { token: Some(token) } => {
            let decoded = layout_codec::try_decode(&token, planner.catalog())
                .context("could not read share token")?;
            print!("{}", render::hive(&decoded.layout, planner.catalog()));
        }
        CliCommand::Show { token: None } => {
            print!("{}", render::hive(planner.layout(), planner.catalog()));
        }
        CliCommand::Share => println!("{}", planner.share_token()),
        CliCommand::Stats => print!("{}", render::stats(&planner.stats())),
        CliCommand::Import { token } => {
            let events = planner.import(&token).context("could not import layout")?;
            report(&planner, &events);
        }
        CliCommand::Shell { .. } => {
            println!("{}", Bootstrap.welcome_banner());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run(&mut planner, stdin.lock(), &mut stdout)?;
        }
        CliCommand::Place { bee, slot } => {
            let events = planner.place(&bee, slot)?;
            report(&planner, &events);
        }
        CliCommand::Move { from, to } => {
            let events = planner.gesture(BuilderInput::Drop {
                source: DragSource::Slot(from),
                target: to,
            });
            report(&planner, &events);
        }
        CliCommand::Remove { slot } => {
            let events = planner.gesture(BuilderInput::DoubleClick { slot });
            report(&planner, &events);
        }
        CliCommand::Gift { slot } => {
            let events = planner.gesture(BuilderInput::RightClick { slot });
            report(&planner, &events);
        }
        CliCommand::Clear => {
            let events = planner.execute(Command::ClearHive);
            report(&planner, &events);
        }
        CliCommand::Level { level } => {
            let events = planner.gesture(BuilderInput::SetLevel {
                level: Level::clamped(level),
            });
            report(&planner, &events);
        }
        CliCommand::Save { name } => {
            let saved = planner.save(&name).context("could not save configuration")?;
            println!("saved `{}` as {}", saved.name, saved.id);
        }
        CliCommand::Saved => print!("{}", render::saved_configs(&planner.saved_configs())),
        CliCommand::Load { id } => {
            let loaded = planner.load(&id)?;
            println!("loaded `{}`", loaded.name);
            print!("{}", render::hive(planner.layout(), planner.catalog()));
        }
        CliCommand::Delete { id } => {
            planner.delete(&id).context("could not delete configuration")?;
            println!("deleted {id}");
        }
    }
    Ok(())
}

fn report<S>(planner: &Planner<S>, events: &[Event])
where
    S: KeyValueStore,
{
    print!("{}", render::events(events));
    print!("{}", render::hive(planner.layout(), planner.catalog()));
}

fn list_bees<'a, S>(
    planner: &'a Planner<S>,
    search: Option<String>,
    rarity: Option<BeeRarity>,
    color: Option<BeeColor>,
) -> Vec<&'a BeeRecord>
where
    S: KeyValueStore,
{
    let mut records = match search {
        Some(query) => planner.catalog().search(&query),
        None => planner.catalog().filter(rarity, color),
    };
    records.retain(|record| {
        rarity.map_or(true, |rarity| record.rarity == rarity)
            && color.map_or(true, |color| record.color == color)
    });
    records
}

fn parse_rarity(value: &str) -> Result<BeeRarity, String> {
    BeeRarity::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = BeeRarity::ALL.into_iter().map(BeeRarity::as_str).collect();
        format!("unknown rarity `{value}`, expected one of {}", names.join(", "))
    })
}

fn parse_color(value: &str) -> Result<BeeColor, String> {
    BeeColor::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = BeeColor::ALL.into_iter().map(BeeColor::as_str).collect();
        format!("unknown colour `{value}`, expected one of {}", names.join(", "))
    })
}
