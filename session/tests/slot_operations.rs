use hive_planner_core::{BeeSlug, Command, Event, HiveSlot, LayoutSnapshot, Level, SlotIndex};
use hive_planner_session::{apply, query, HiveSession};

fn slot(index: usize) -> SlotIndex {
    SlotIndex::new(index).expect("index within hive")
}

fn place_command(bee: &str, index: usize, gifted: bool, level: i64) -> Command {
    Command::PlaceBee {
        bee: BeeSlug::new(bee),
        slot: slot(index),
        gifted,
        level: Level::clamped(level),
    }
}

fn run(session: &mut HiveSession, commands: Vec<Command>) -> Vec<Event> {
    let mut events = Vec::new();
    for command in commands {
        apply(session, command, &mut events);
    }
    events
}

fn occupant(session: &HiveSession, index: usize) -> Option<&str> {
    query::slot(session, slot(index)).occupant().map(BeeSlug::as_str)
}

#[test]
fn place_then_move_into_empty_slot() {
    let mut session = HiveSession::new();

    let events = run(
        &mut session,
        vec![
            place_command("basic-bee", 0, false, 12),
            Command::MoveOrSwap {
                from: slot(0),
                to: slot(1),
            },
        ],
    );

    assert_eq!(occupant(&session, 0), None);
    assert_eq!(occupant(&session, 1), Some("basic-bee"));
    assert_eq!(
        events.last(),
        Some(&Event::BeeMoved {
            from: slot(0),
            to: slot(1)
        })
    );
}

#[test]
fn move_onto_occupied_slot_swaps_contents() {
    let mut session = HiveSession::new();

    let events = run(
        &mut session,
        vec![
            place_command("basic-bee", 0, true, 3),
            place_command("bomber-bee", 1, false, 7),
            Command::MoveOrSwap {
                from: slot(0),
                to: slot(1),
            },
        ],
    );

    assert_eq!(occupant(&session, 0), Some("bomber-bee"));
    assert_eq!(occupant(&session, 1), Some("basic-bee"));
    assert!(query::slot(&session, slot(1)).is_gifted(), "flags travel with the bee");
    assert_eq!(query::slot(&session, slot(0)).level(), Level::clamped(7));
    assert_eq!(
        events.last(),
        Some(&Event::SlotsSwapped {
            from: slot(0),
            to: slot(1)
        })
    );
}

#[test]
fn move_onto_same_slot_is_noop() {
    let mut session = HiveSession::new();
    let _ = run(&mut session, vec![place_command("basic-bee", 4, false, 12)]);
    let depth_before = query::history_depth(&session);

    let events = run(
        &mut session,
        vec![Command::MoveOrSwap {
            from: slot(4),
            to: slot(4),
        }],
    );

    assert!(events.is_empty());
    assert_eq!(query::history_depth(&session), depth_before);
}

#[test]
fn toggle_gifted_on_empty_slot_records_nothing() {
    let mut session = HiveSession::new();

    let events = run(&mut session, vec![Command::ToggleGifted { slot: slot(5) }]);

    assert!(events.is_empty());
    assert!(query::slot(&session, slot(5)).is_empty());
    assert!(!query::can_undo(&session));
}

#[test]
fn toggle_gifted_flips_flag_each_time() {
    let mut session = HiveSession::new();

    let events = run(
        &mut session,
        vec![
            place_command("cool-bee", 2, false, 12),
            Command::ToggleGifted { slot: slot(2) },
            Command::ToggleGifted { slot: slot(2) },
        ],
    );

    assert_eq!(
        &events[1..],
        &[
            Event::GiftedToggled {
                slot: slot(2),
                gifted: true
            },
            Event::GiftedToggled {
                slot: slot(2),
                gifted: false
            },
        ]
    );
    assert!(!query::slot(&session, slot(2)).is_gifted());
}

#[test]
fn removing_empty_slot_is_noop() {
    let mut session = HiveSession::new();

    let events = run(&mut session, vec![Command::RemoveBee { slot: slot(9) }]);

    assert!(events.is_empty());
    assert!(!query::can_undo(&session));
}

#[test]
fn remove_reports_evicted_bee() {
    let mut session = HiveSession::new();

    let events = run(
        &mut session,
        vec![
            place_command("demo-bee", 9, true, 20),
            Command::RemoveBee { slot: slot(9) },
        ],
    );

    assert_eq!(
        events.last(),
        Some(&Event::BeeRemoved {
            slot: slot(9),
            bee: BeeSlug::new("demo-bee")
        })
    );
    assert_eq!(query::slot(&session, slot(9)), &HiveSlot::empty());
}

#[test]
fn default_level_rewrites_only_stale_occupied_slots() {
    let mut session = HiveSession::new();
    let _ = run(
        &mut session,
        vec![
            place_command("basic-bee", 0, false, 12),
            place_command("rad-bee", 1, false, 12),
            place_command("fire-bee", 2, false, 20),
        ],
    );

    let events = run(
        &mut session,
        vec![Command::SetDefaultLevel {
            level: Level::clamped(20),
        }],
    );

    for index in 0..3 {
        assert_eq!(query::slot(&session, slot(index)).level(), Level::clamped(20));
    }
    assert_eq!(
        events,
        vec![Event::LevelsChanged {
            level: Level::clamped(20),
            slots: vec![slot(0), slot(1)],
        }],
        "the slot already at the target level is not reported"
    );
    assert!(query::slot(&session, slot(3)).is_empty(), "empty slots stay empty");
}

#[test]
fn default_level_matching_every_slot_is_noop() {
    let mut session = HiveSession::new();
    let _ = run(&mut session, vec![place_command("basic-bee", 0, false, 20)]);
    let depth_before = query::history_depth(&session);

    let events = run(
        &mut session,
        vec![Command::SetDefaultLevel {
            level: Level::clamped(20),
        }],
    );

    assert!(events.is_empty());
    assert_eq!(query::history_depth(&session), depth_before);
}

#[test]
fn clear_all_is_undoable() {
    let mut session = HiveSession::new();
    let _ = run(
        &mut session,
        vec![
            place_command("basic-bee", 0, false, 12),
            place_command("rad-bee", 24, true, 18),
        ],
    );
    let before_clear = query::layout(&session).clone();

    let events = run(&mut session, vec![Command::ClearHive, Command::Undo]);

    assert_eq!(events, vec![Event::HiveCleared, Event::Undone]);
    assert_eq!(query::layout(&session), &before_clear);
}

#[test]
fn undo_redo_round_trip_through_commands() {
    let mut session = HiveSession::new();
    let _ = run(
        &mut session,
        vec![
            place_command("basic-bee", 0, false, 12),
            place_command("rad-bee", 1, false, 12),
        ],
    );
    let latest = query::layout(&session).clone();

    let events = run(&mut session, vec![Command::Undo, Command::Redo]);

    assert_eq!(events, vec![Event::Undone, Event::Redone]);
    assert_eq!(query::layout(&session), &latest);
    assert!(!query::can_redo(&session));
}

#[test]
fn mutation_after_undo_discards_redo() {
    let mut session = HiveSession::new();
    let _ = run(
        &mut session,
        vec![
            place_command("basic-bee", 0, false, 12),
            place_command("rad-bee", 1, false, 12),
            Command::Undo,
            place_command("cool-bee", 2, false, 12),
        ],
    );

    let events = run(&mut session, vec![Command::Redo]);

    assert!(events.is_empty());
    assert_eq!(occupant(&session, 1), None);
    assert_eq!(occupant(&session, 2), Some("cool-bee"));
}

#[test]
fn import_replaces_layout_and_can_be_undone() {
    let imported = LayoutSnapshot::empty().with_slot(
        slot(12),
        HiveSlot::occupied(BeeSlug::new("vicious-bee"), true, Level::MAX),
    );
    let mut session = HiveSession::new();
    let _ = run(&mut session, vec![place_command("basic-bee", 0, false, 12)]);

    let events = run(
        &mut session,
        vec![
            Command::ImportLayout {
                layout: imported.clone(),
            },
            Command::ImportLayout {
                layout: imported.clone(),
            },
        ],
    );

    assert_eq!(events, vec![Event::LayoutImported]);
    assert_eq!(query::layout(&session), &imported);

    let _ = run(&mut session, vec![Command::Undo]);
    assert_eq!(occupant(&session, 0), Some("basic-bee"));
}

#[test]
fn history_depth_is_capped_by_session_configuration() {
    let mut session = HiveSession::with_layout(LayoutSnapshot::empty(), 3);
    let commands = (0..6)
        .map(|index| place_command("basic-bee", index, false, 12))
        .collect();

    let _ = run(&mut session, commands);

    assert_eq!(query::history_depth(&session).undo, 3);
}
