//! End-to-end behavior of string-keyed machines loaded from JSON.

use rewind_fsm::{FsmError, StateMachine, Validation};

type Machine = StateMachine<String, String>;

const ON_OFF: &str = r#"{
    "states": {
        "idle": { "transitions": { "start": "running" } },
        "running": { "transitions": { "stop": "idle" } }
    },
    "initial": "idle"
}"#;

const EDITOR: &str = r#"{
    "states": {
        "normal": { "transitions": { "insert": "inserting", "visual": "selecting" } },
        "inserting": { "transitions": { "escape": "normal" } },
        "selecting": { "transitions": { "escape": "normal", "insert": "inserting" } },
        "command": { "transitions": { "escape": "normal" } }
    },
    "initial": "normal"
}"#;

fn sorted(states: Vec<&String>) -> Vec<&str> {
    let mut names: Vec<&str> = states.into_iter().map(String::as_str).collect();
    names.sort_unstable();
    names
}

#[test]
fn construction_without_config_fails() {
    for json in ["", "null", "{}"] {
        let err = Machine::from_json(json).unwrap_err();
        assert!(
            matches!(err, FsmError::Configuration(_)),
            "{json:?} gave {err:?}"
        );
    }
}

#[test]
fn construction_with_unknown_initial_fails() {
    let err = Machine::from_json(
        r#"{ "states": { "idle": {} }, "initial": "running" }"#,
    )
    .unwrap_err();

    assert_eq!(
        err,
        FsmError::InvalidState {
            state: "running".into()
        }
    );
}

#[test]
fn fresh_machine_has_nothing_to_undo() {
    let mut machine = Machine::from_json(ON_OFF).unwrap();

    assert_eq!(machine.current_state(), "idle");
    assert!(!machine.undo());
    assert_eq!(machine.current_state(), "idle");
}

#[test]
fn triggers_follow_the_table() {
    let mut machine = Machine::from_json(EDITOR).unwrap();

    machine.trigger("visual").unwrap();
    assert_eq!(machine.current_state(), "selecting");
    machine.trigger("insert").unwrap();
    assert_eq!(machine.current_state(), "inserting");
    machine.trigger("escape").unwrap();
    assert_eq!(machine.current_state(), "normal");
}

#[test]
fn unknown_event_leaves_state_unchanged() {
    let mut machine = Machine::from_json(ON_OFF).unwrap();

    let err = machine.trigger("stop").unwrap_err();
    assert_eq!(
        err,
        FsmError::UnknownEvent {
            event: "stop".into(),
            from: "idle".into(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Event 'stop' is not present in the transitions of state 'idle'"
    );
    assert_eq!(machine.current_state(), "idle");
    assert_eq!(machine.history().len(), 1);
}

#[test]
fn change_state_to_unknown_state_fails() {
    let mut machine = Machine::from_json(ON_OFF).unwrap();

    let err = machine.change_state("paused").unwrap_err();
    assert!(matches!(err, FsmError::InvalidState { .. }));
    assert_eq!(machine.current_state(), "idle");
}

#[test]
fn change_state_bypasses_transitions() {
    let mut machine = Machine::from_json(EDITOR).unwrap();

    // "command" is unreachable through events.
    machine.change_state("command").unwrap();
    assert_eq!(machine.current_state(), "command");
    machine.trigger("escape").unwrap();
    assert_eq!(machine.current_state(), "normal");
}

#[test]
fn undo_then_redo_restores_state() {
    let mut machine = Machine::from_json(ON_OFF).unwrap();
    machine.trigger("start").unwrap();

    assert!(machine.undo());
    assert_eq!(machine.current_state(), "idle");
    assert!(machine.redo());
    assert_eq!(machine.current_state(), "running");
    assert!(!machine.redo());
}

#[test]
fn new_change_after_undo_discards_redo() {
    let mut machine = Machine::from_json(EDITOR).unwrap();
    machine.change_state("inserting").unwrap();
    machine.change_state("selecting").unwrap();

    assert!(machine.undo());
    assert!(machine.undo());
    assert_eq!(machine.current_state(), "normal");

    machine.change_state("command").unwrap();
    assert!(!machine.redo());
    assert_eq!(machine.history().path(), vec!["normal", "command"]);
}

#[test]
fn reset_is_undoable() {
    let mut machine = Machine::from_json(EDITOR).unwrap();
    machine.trigger("insert").unwrap();

    machine.reset();
    assert_eq!(machine.current_state(), "normal");
    assert!(machine.undo());
    assert_eq!(machine.current_state(), "inserting");
}

#[test]
fn get_states_with_and_without_event() {
    let machine = Machine::from_json(ON_OFF).unwrap();

    assert_eq!(sorted(machine.states(None)), vec!["idle", "running"]);
    assert_eq!(
        sorted(machine.states(Some(&"start".to_string()))),
        vec!["idle"]
    );
    assert_eq!(
        sorted(machine.states(Some(&"stop".to_string()))),
        vec!["running"]
    );
}

#[test]
fn get_states_accepts_borrowed_events() {
    let machine = Machine::from_json(ON_OFF).unwrap();

    assert_eq!(sorted(machine.states_with_event("start")), vec!["idle"]);
    assert_eq!(sorted(machine.states_with_event("stop")), vec!["running"]);
    assert!(machine.states_with_event("pause").is_empty());
    assert_eq!(sorted(machine.all_states()), vec!["idle", "running"]);
}

#[test]
fn get_states_for_shared_event() {
    let machine = Machine::from_json(EDITOR).unwrap();

    assert_eq!(
        sorted(machine.states_with_event("escape")),
        vec!["command", "inserting", "selecting"]
    );
    assert!(machine.states_with_event("quit").is_empty());
}

#[test]
fn lazy_validation_surfaces_bad_target_on_use() {
    let json = r#"{
        "states": {
            "idle": { "transitions": { "start": "running", "crash": "broken" } },
            "running": {}
        },
        "initial": "idle"
    }"#;

    let mut machine = Machine::from_json(json).unwrap();
    machine.trigger("start").unwrap();
    machine.reset();

    let err = machine.trigger("crash").unwrap_err();
    assert_eq!(
        err,
        FsmError::InvalidState {
            state: "broken".into()
        }
    );
    assert_eq!(machine.current_state(), "idle");
}

#[test]
fn eager_validation_rejects_bad_target_up_front() {
    let json = r#"{
        "states": {
            "idle": { "transitions": { "crash": "broken" } }
        },
        "initial": "idle",
        "validation": "eager"
    }"#;

    let err = Machine::from_json(json).unwrap_err();
    assert_eq!(
        err,
        FsmError::DanglingTransition {
            from: "idle".into(),
            event: "crash".into(),
            to: "broken".into(),
        }
    );
}

#[test]
fn history_limit_from_json() {
    let json = r#"{
        "states": { "a": { "transitions": { "next": "b" } }, "b": { "transitions": { "next": "a" } } },
        "initial": "a",
        "history_limit": 3
    }"#;

    let mut machine = Machine::from_json(json).unwrap();
    for _ in 0..5 {
        machine.trigger("next").unwrap();
    }

    assert_eq!(machine.history().len(), 3);
    assert!(machine.undo());
    assert!(machine.undo());
    assert!(!machine.undo());
}

#[test]
fn validation_mode_parses_case_sensitively() {
    let json = r#"{ "states": { "a": {} }, "initial": "a", "validation": "Eager" }"#;
    assert!(matches!(
        Machine::from_json(json),
        Err(FsmError::Configuration(_))
    ));
    assert_eq!(Validation::default(), Validation::Lazy);
}
