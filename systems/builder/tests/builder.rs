use hive_planner_core::{BeeSlug, Command, Level, SlotIndex};
use hive_planner_system_builder::{Builder, BuilderInput, DragSource, PlacementDefaults};

fn slot(index: usize) -> SlotIndex {
    SlotIndex::new(index).expect("index within hive")
}

#[test]
fn palette_drop_places_bee_with_defaults() {
    let mut builder = Builder::new(PlacementDefaults::new(true, Level::clamped(18)));
    let mut commands = Vec::new();

    builder.handle(
        BuilderInput::Drop {
            source: DragSource::Palette(BeeSlug::new("ninja-bee")),
            target: slot(7),
        },
        |_| false,
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![Command::PlaceBee {
            bee: BeeSlug::new("ninja-bee"),
            slot: slot(7),
            gifted: true,
            level: Level::clamped(18),
        }],
        "palette drops should carry the current placement defaults",
    );
}

#[test]
fn slot_drop_emits_move_or_swap() {
    let mut builder = Builder::default();
    let mut commands = Vec::new();

    builder.handle(
        BuilderInput::Drop {
            source: DragSource::Slot(slot(2)),
            target: slot(3),
        },
        |_| true,
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![Command::MoveOrSwap {
            from: slot(2),
            to: slot(3),
        }],
    );
}

#[test]
fn slot_dropped_onto_itself_emits_nothing() {
    let mut builder = Builder::default();
    let mut commands = Vec::new();

    builder.handle(
        BuilderInput::Drop {
            source: DragSource::Slot(slot(4)),
            target: slot(4),
        },
        |_| true,
        &mut commands,
    );

    assert!(commands.is_empty());
}

#[test]
fn clicks_on_occupied_slot_remove_and_toggle() {
    let mut builder = Builder::default();
    let mut commands = Vec::new();
    let mut looked_up = Vec::new();

    builder.handle(
        BuilderInput::DoubleClick { slot: slot(5) },
        |index| {
            looked_up.push(index);
            true
        },
        &mut commands,
    );
    builder.handle(
        BuilderInput::RightClick { slot: slot(6) },
        |_| true,
        &mut commands,
    );

    assert_eq!(looked_up, vec![slot(5)]);
    assert_eq!(
        commands,
        vec![
            Command::RemoveBee { slot: slot(5) },
            Command::ToggleGifted { slot: slot(6) },
        ],
    );
}

#[test]
fn clicks_on_empty_slot_are_ignored() {
    let mut builder = Builder::default();
    let mut commands = Vec::new();

    builder.handle(
        BuilderInput::DoubleClick { slot: slot(1) },
        |_| false,
        &mut commands,
    );
    builder.handle(
        BuilderInput::RightClick { slot: slot(1) },
        |_| false,
        &mut commands,
    );

    assert!(commands.is_empty(), "nothing to remove or toggle");
}

#[test]
fn level_buttons_clamp_and_push_new_level() {
    let mut builder = Builder::new(PlacementDefaults::new(false, Level::clamped(24)));
    let mut commands = Vec::new();

    builder.handle(BuilderInput::IncrementLevel, |_| false, &mut commands);
    builder.handle(BuilderInput::IncrementLevel, |_| false, &mut commands);

    assert_eq!(builder.defaults().level, Level::MAX);
    assert_eq!(
        commands,
        vec![
            Command::SetDefaultLevel { level: Level::MAX },
            Command::SetDefaultLevel { level: Level::MAX },
        ],
        "saturated increments still push the clamped level",
    );

    commands.clear();
    builder.handle(
        BuilderInput::SetLevel { level: Level::MIN },
        |_| false,
        &mut commands,
    );
    builder.handle(BuilderInput::DecrementLevel, |_| false, &mut commands);

    assert_eq!(builder.defaults().level, Level::MIN);
    assert_eq!(
        commands,
        vec![
            Command::SetDefaultLevel { level: Level::MIN },
            Command::SetDefaultLevel { level: Level::MIN },
        ],
    );
}

#[test]
fn level_matching_the_default_still_reaches_the_hive() {
    let mut builder = Builder::new(PlacementDefaults::new(false, Level::clamped(20)));
    let mut commands = Vec::new();

    builder.handle(
        BuilderInput::SetLevel {
            level: Level::clamped(20),
        },
        |_| true,
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![Command::SetDefaultLevel {
            level: Level::clamped(20),
        }],
        "bees imported at another level must still be relevelled",
    );
}

#[test]
fn gifted_mode_only_changes_defaults() {
    let mut builder = Builder::default();
    let mut commands = Vec::new();

    builder.handle(
        BuilderInput::SetGiftedMode { gifted: true },
        |_| false,
        &mut commands,
    );

    assert!(commands.is_empty());
    assert!(builder.defaults().gifted);
}
