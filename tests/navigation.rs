use stresscheck::dataset::parse_dataset;
use stresscheck::model::Dataset;
use stresscheck::state::{AppState, InputMode};

fn two_question_dataset() -> Dataset {
    parse_dataset(
        r#"
title: Short
questions:
  - id: 1
    type: number
    text: Level
    min: 1
    max: 10
  - id: 2
    type: radio
    text: Pick one
    options:
      - { value: a, label: A, points: 2 }
      - { value: b, label: B, points: 5 }
      - { value: "0", label: None of these, points: 0 }
categories: []
results: []
"#,
    )
    .unwrap()
}

#[test]
fn test_numeric_gate_accepts_one_through_ten() {
    let mut state = AppState::new(two_question_dataset());

    for n in 1..=10 {
        state.record_answer(0, n.to_string());
        assert!(state.can_advance(), "{} should pass the gate", n);
    }
}

#[test]
fn test_numeric_gate_rejects_out_of_range_and_garbage() {
    let mut state = AppState::new(two_question_dataset());
    assert!(!state.can_advance(), "no answer yet");

    for raw in ["0", "11", "-3", "100", "abc", "", "1.5"] {
        state.record_answer(0, raw.to_string());
        assert!(!state.can_advance(), "{:?} should be rejected", raw);
    }
}

#[test]
fn test_recorded_answer_reads_back_verbatim() {
    let mut state = AppState::new(two_question_dataset());

    state.record_answer(0, "07".to_string());
    assert_eq!(state.answers.get(&1).map(String::as_str), Some("07"));
    assert!(state.can_advance());
}

#[test]
fn test_choice_gate_requires_presence_only() {
    let mut state = AppState::new(two_question_dataset());
    state.record_answer(0, "5".to_string());
    state.advance();
    assert_eq!(state.current_index, 1);
    assert!(!state.can_advance(), "nothing selected yet");

    // A stored "0" is a real answer
    state.record_answer(1, "0".to_string());
    assert!(state.can_advance());

    state.record_answer(1, "".to_string());
    assert!(!state.can_advance(), "empty value does not pass");
}

#[test]
fn test_retreat_at_first_question_is_noop() {
    let mut state = AppState::new(two_question_dataset());

    state.retreat();
    assert_eq!(state.current_index, 0);
    assert!(!state.completed);
}

#[test]
fn test_advance_on_last_question_completes_without_moving() {
    let mut state = AppState::new(two_question_dataset());
    state.record_answer(0, "5".to_string());
    state.advance();
    state.record_answer(1, "a".to_string());
    state.advance();

    assert!(state.completed);
    assert_eq!(state.current_index, 1);

    // Completed is terminal
    state.advance();
    state.retreat();
    assert!(state.completed);
    assert_eq!(state.current_index, 1);
}

#[test]
fn test_select_choice_records_option_value() {
    let mut state = AppState::new(two_question_dataset());
    state.record_answer(0, "5".to_string());
    state.advance();

    state.select_choice(1);
    assert_eq!(state.answers.get(&2).map(String::as_str), Some("b"));
    assert!(state.is_choice_selected(2, "b"));
    assert!(!state.is_choice_selected(2, "a"));
}

#[test]
fn test_revisiting_restores_input_widgets() {
    let mut state = AppState::new(two_question_dataset());
    assert_eq!(state.input_mode, InputMode::NumberInput);

    state.record_answer(0, "5".to_string());
    state.advance();
    assert_eq!(state.input_mode, InputMode::ChoiceSelect);

    state.select_choice(1);
    state.retreat();
    assert_eq!(state.input_mode, InputMode::NumberInput);
    assert_eq!(state.number_input, "5");

    state.advance();
    assert_eq!(state.choice_cursor, 1, "cursor returns to the stored selection");
}

#[test]
fn test_out_of_range_flag_only_for_parseable_input() {
    let mut state = AppState::new(two_question_dataset());

    state.record_answer(0, "12".to_string());
    assert!(state.number_answer_out_of_range(1));

    state.record_answer(0, "abc".to_string());
    assert!(!state.number_answer_out_of_range(1), "unparseable input shows no message");

    state.record_answer(0, "5".to_string());
    assert!(!state.number_answer_out_of_range(1));
}

#[test]
fn test_progress_fraction() {
    let mut state = AppState::new(two_question_dataset());
    assert_eq!(state.progress(), 0.5);

    state.record_answer(0, "5".to_string());
    state.advance();
    assert_eq!(state.progress(), 1.0);
    assert!(state.is_last_question());
}

#[test]
fn test_restart_discards_all_progress() {
    let mut state = AppState::new(two_question_dataset());
    state.record_answer(0, "5".to_string());
    state.advance();
    state.select_choice(0);
    state.advance();
    assert!(state.completed);

    state.restart();
    assert_eq!(state.current_index, 0);
    assert!(state.answers.is_empty());
    assert!(!state.completed);
    assert_eq!(state.input_mode, InputMode::NumberInput);
}
