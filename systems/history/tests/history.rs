use hive_planner_system_history::History;

#[test]
fn equal_value_is_not_recorded() {
    let mut history = History::new(vec![1, 2, 3]);

    let recorded = history.set_state(|current| current.clone());

    assert!(!recorded, "structurally equal update must be ignored");
    assert_eq!(history.past().len(), 0);
    assert!(history.future().is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn equal_value_after_undo_keeps_redo_stack() {
    let mut history = History::new(0_u32);
    assert!(history.set(1));
    assert!(history.undo());

    assert!(!history.set(0));

    assert!(history.can_redo(), "no-op update must not discard the redo stack");
    assert_eq!(history.future(), &[1]);
}

#[test]
fn redo_restores_value_seen_before_undo() {
    let mut history = History::new(0_u32);
    for value in 1..=4 {
        assert!(history.set_state(|_| value));
    }

    assert!(history.undo());
    assert_eq!(*history.current(), 3);
    assert!(history.redo());

    assert_eq!(*history.current(), 4);
    assert!(!history.can_redo());
    assert_eq!(history.past().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn undo_walks_back_to_initial_value() {
    let mut history = History::new("start");
    assert!(history.set("middle"));
    assert!(history.set("end"));

    assert!(history.undo());
    assert!(history.undo());
    assert!(!history.undo(), "nothing left to undo");

    assert_eq!(*history.current(), "start");
    assert_eq!(history.future(), &["end", "middle"]);
}

#[test]
fn new_value_after_undo_discards_future() {
    let mut history = History::new(0_u32);
    assert!(history.set(1));
    assert!(history.set(2));
    assert!(history.undo());
    assert!(history.can_redo());

    assert!(history.set(7));

    assert!(!history.can_redo());
    assert!(!history.redo(), "redo is a no-op once the branch is discarded");
    assert_eq!(*history.current(), 7);
    assert_eq!(history.past().copied().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn past_is_capped_with_fifo_eviction() {
    let max_history = 5;
    let extra = 3;
    let mut history = History::with_max_history(0_usize, max_history);

    for value in 1..=(max_history + extra) {
        assert!(history.set(value));
    }

    let past: Vec<usize> = history.past().copied().collect();
    assert_eq!(past.len(), max_history);
    assert_eq!(past.first(), Some(&extra), "oldest survivor is mutation index k");
    assert_eq!(past.last(), Some(&(max_history + extra - 1)));
}

#[test]
fn redo_respects_cap() {
    let mut history = History::with_max_history(0_u32, 2);
    assert!(history.set(1));
    assert!(history.set(2));
    assert!(history.undo());
    assert!(history.undo());
    assert_eq!(*history.current(), 0);

    assert!(history.redo());
    assert!(history.redo());

    assert_eq!(*history.current(), 2);
    assert_eq!(history.past().copied().collect::<Vec<_>>(), vec![0, 1]);
}
