use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use hive_planner_core::{Command, Level, SlotIndex, HIVE_SLOT_COUNT};
use hive_planner_storage::KeyValueStore;
use hive_planner_system_builder::{BuilderInput, DragSource};

use crate::{planner::Planner, render};

const PROMPT: &str = "hive> ";
const HELP: &str = "\
place <bee> <slot>   drop a bee from the catalog onto a slot
move <from> <to>     move a bee, swapping with any occupant
remove <slot>        empty a slot
gift <slot>          toggle the gifted flag of a slot
gifted on|off        choose whether placed bees start gifted
level <n>|+|-        set the level of every placed bee
clear                empty the whole hive
undo | redo          step through history
forget               drop the undo and redo history
import <token>       replace the hive with a shared layout
save <name>          store the hive as a named configuration
saved                list saved configurations
load <id>            replace the hive with a saved configuration
show | share | stats inspect the hive
quit                 leave the shell
";

/// Change requested for the default level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LevelChange {
    Set(Level),
    Up,
    Down,
}

/// One parsed shell line.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ShellCommand {
    Place { bee: String, slot: SlotIndex },
    Move { from: SlotIndex, to: SlotIndex },
    Remove(SlotIndex),
    Gift(SlotIndex),
    GiftedMode(bool),
    Level(LevelChange),
    Clear,
    Undo,
    Redo,
    Forget,
    Import(String),
    Save(String),
    Saved,
    Load(String),
    Show,
    Share,
    Stats,
    Help,
    Quit,
}

/// Parses a slot index typed by the user.
pub(crate) fn parse_slot(value: &str) -> Result<SlotIndex, String> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(SlotIndex::new)
        .ok_or_else(|| {
            format!(
                "slot must be a number between 0 and {}, got `{value}`",
                HIVE_SLOT_COUNT - 1
            )
        })
}

fn slot_arg(value: Option<&str>) -> Result<SlotIndex> {
    let value = value.ok_or_else(|| anyhow!("missing slot number"))?;
    parse_slot(value).map_err(|message| anyhow!(message))
}

fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();

    let command = match verb.to_ascii_lowercase().as_str() {
        "place" => {
            let Some((bee, slot)) = rest.rsplit_once(char::is_whitespace) else {
                bail!("usage: place <bee> <slot>");
            };
            ShellCommand::Place {
                bee: bee.trim().to_owned(),
                slot: slot_arg(Some(slot))?,
            }
        }
        "move" => ShellCommand::Move {
            from: slot_arg(args.next())?,
            to: slot_arg(args.next())?,
        },
        "remove" => ShellCommand::Remove(slot_arg(args.next())?),
        "gift" => ShellCommand::Gift(slot_arg(args.next())?),
        "gifted" => match args.next() {
            Some("on") => ShellCommand::GiftedMode(true),
            Some("off") => ShellCommand::GiftedMode(false),
            _ => bail!("usage: gifted on|off"),
        },
        "level" => match args.next() {
            Some("+") => ShellCommand::Level(LevelChange::Up),
            Some("-") => ShellCommand::Level(LevelChange::Down),
            Some(value) => {
                let level: i64 = value
                    .parse()
                    .with_context(|| format!("invalid level `{value}`"))?;
                ShellCommand::Level(LevelChange::Set(Level::clamped(level)))
            }
            None => bail!("usage: level <n>|+|-"),
        },
        "clear" => ShellCommand::Clear,
        "undo" => ShellCommand::Undo,
        "redo" => ShellCommand::Redo,
        "forget" => ShellCommand::Forget,
        "import" if !rest.is_empty() => ShellCommand::Import(rest.to_owned()),
        "import" => bail!("usage: import <token>"),
        "save" => ShellCommand::Save(rest.to_owned()),
        "saved" => ShellCommand::Saved,
        "load" => match args.next() {
            Some(id) => ShellCommand::Load(id.to_owned()),
            None => bail!("usage: load <id>"),
        },
        "show" => ShellCommand::Show,
        "share" => ShellCommand::Share,
        "stats" => ShellCommand::Stats,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => bail!("unknown command `{other}`, type `help` for a list"),
    };
    Ok(Some(command))
}

/// Runs the interactive session until `quit` or end of input.
pub(crate) fn run<S, R, W>(planner: &mut Planner<S>, input: R, output: &mut W) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render::hive(planner.layout(), planner.catalog()))?;
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("failed to read shell input")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(output, "error: {error:#}")?;
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }
        match execute(planner, command) {
            Ok(text) => write!(output, "{text}")?,
            Err(error) => writeln!(output, "error: {error:#}")?,
        }
    }
    output.flush()?;
    Ok(())
}

fn execute<S>(planner: &mut Planner<S>, command: ShellCommand) -> Result<String>
where
    S: KeyValueStore,
{
    let text = match command {
        ShellCommand::Place { bee, slot } => render::events(&planner.place(&bee, slot)?),
        ShellCommand::Move { from, to } => render::events(&planner.gesture(BuilderInput::Drop {
            source: DragSource::Slot(from),
            target: to,
        })),
        ShellCommand::Remove(slot) => {
            render::events(&planner.gesture(BuilderInput::DoubleClick { slot }))
        }
        ShellCommand::Gift(slot) => {
            render::events(&planner.gesture(BuilderInput::RightClick { slot }))
        }
        ShellCommand::GiftedMode(gifted) => {
            let _events = planner.gesture(BuilderInput::SetGiftedMode { gifted });
            let mode = if planner.defaults().gifted { "gifted" } else { "regular" };
            format!("new bees are placed {mode}\n")
        }
        ShellCommand::Level(change) => {
            let input = match change {
                LevelChange::Set(level) => BuilderInput::SetLevel { level },
                LevelChange::Up => BuilderInput::IncrementLevel,
                LevelChange::Down => BuilderInput::DecrementLevel,
            };
            let events = planner.gesture(input);
            format!(
                "default level {}\n{}",
                planner.defaults().level,
                render::events(&events)
            )
        }
        ShellCommand::Clear => render::events(&planner.execute(Command::ClearHive)),
        ShellCommand::Undo if !planner.can_undo() => String::from("nothing to undo\n"),
        ShellCommand::Undo => render::events(&planner.execute(Command::Undo)),
        ShellCommand::Redo if !planner.can_redo() => String::from("nothing to redo\n"),
        ShellCommand::Redo => render::events(&planner.execute(Command::Redo)),
        ShellCommand::Forget => render::events(&planner.execute(Command::ClearHistory)),
        ShellCommand::Import(token) => render::events(&planner.import(&token)?),
        ShellCommand::Save(name) => {
            let config = planner.save(&name)?;
            format!("saved `{}` as {}\n", config.name, config.id)
        }
        ShellCommand::Saved => render::saved_configs(&planner.saved_configs()),
        ShellCommand::Load(id) => {
            let config = planner.load(&id)?;
            format!("loaded `{}`\n", config.name)
        }
        ShellCommand::Show => render::hive(planner.layout(), planner.catalog()),
        ShellCommand::Share => format!("{}\n", planner.share_token()),
        ShellCommand::Stats => render::stats(&planner.stats()),
        ShellCommand::Help => HELP.to_owned(),
        ShellCommand::Quit => String::new(),
    };
    Ok(text)
}
