use std::collections::HashMap;

use crate::model::{Dataset, Question, QuestionKind};

/// Advance gate for the first question. Fixed at 1..=10 even when the
/// dataset declares different `min`/`max` bounds for that question.
const FIRST_ANSWER_MIN: i64 = 1;
const FIRST_ANSWER_MAX: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Working,
    Results,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmQuit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    NumberInput,
    ChoiceSelect,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub dataset: Dataset,
    pub current_index: usize,
    /// Raw answers keyed by question id, stored verbatim as typed or
    /// selected. Entries are inserted or overwritten, never removed.
    pub answers: HashMap<u32, String>,
    pub completed: bool,
    pub input_mode: InputMode,
    pub dialog_stack: Vec<Dialog>,
    pub choice_cursor: usize,
    pub number_input: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let mut state = Self {
            screen: Screen::Working,
            dataset,
            current_index: 0,
            answers: HashMap::new(),
            completed: false,
            input_mode: InputMode::NumberInput,
            dialog_stack: Vec::new(),
            choice_cursor: 0,
            number_input: String::new(),
            should_quit: false,
        };
        state.sync_question_widgets();
        state
    }

    /// Discard all progress and start over on the same dataset.
    pub fn restart(&mut self) {
        *self = AppState::new(self.dataset.clone());
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.dataset.questions.get(self.current_index)
    }

    pub fn current_question_id(&self) -> u32 {
        self.current_question().map(|q| q.id).unwrap_or(0)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.dataset.questions.len()
    }

    /// Fraction of the question sequence reached, for the progress gauge.
    pub fn progress(&self) -> f64 {
        let total = self.dataset.questions.len();
        if total == 0 {
            return 0.0;
        }
        (self.current_index + 1) as f64 / total as f64
    }

    /// Store the raw value for the question displayed at `question_index`.
    /// Question ids are dense and 1-based, so the key is `index + 1`.
    /// No validation happens here; the advance gate is the only check.
    pub fn record_answer(&mut self, question_index: usize, raw: String) {
        self.answers.insert(question_index as u32 + 1, raw);
    }

    /// Whether navigation past the current question is allowed.
    ///
    /// The first question requires a stored answer that parses as an
    /// integer inside the fixed gate range. Every other question only
    /// requires a non-empty stored answer (`"0"` counts).
    pub fn can_advance(&self) -> bool {
        if self.current_index == 0 {
            return match self.answers.get(&1) {
                Some(raw) => match raw.trim().parse::<i64>() {
                    Ok(n) => n >= FIRST_ANSWER_MIN && n <= FIRST_ANSWER_MAX,
                    Err(_) => false,
                },
                None => false,
            };
        }

        let Some(question) = self.current_question() else {
            return false;
        };
        self.answers
            .get(&question.id)
            .map(|raw| !raw.is_empty())
            .unwrap_or(false)
    }

    /// Move to the next question, or mark the sequence completed when
    /// already on the last one. The caller checks `can_advance` first;
    /// this does not re-validate. No-op once completed.
    pub fn advance(&mut self) {
        if self.completed {
            return;
        }
        if self.current_index + 1 < self.dataset.questions.len() {
            self.current_index += 1;
            self.sync_question_widgets();
        } else {
            self.completed = true;
        }
    }

    /// Move back one question. No-op at the first question and once
    /// completed. Retreating never requires a stored answer.
    pub fn retreat(&mut self) {
        if self.completed {
            return;
        }
        if self.current_index > 0 {
            self.current_index -= 1;
            self.sync_question_widgets();
        }
    }

    /// Record the option at `idx` of the current choice question.
    pub fn select_choice(&mut self, idx: usize) {
        let value = match self.current_question().map(|q| &q.kind) {
            Some(QuestionKind::Radio { options }) => options.get(idx).map(|o| o.value.clone()),
            _ => None,
        };
        if let Some(value) = value {
            self.record_answer(self.current_index, value);
        }
    }

    pub fn choice_count(&self) -> usize {
        match self.current_question().map(|q| &q.kind) {
            Some(QuestionKind::Radio { options }) => options.len(),
            _ => 0,
        }
    }

    pub fn is_choice_selected(&self, qid: u32, value: &str) -> bool {
        self.answers.get(&qid).map(|v| v == value).unwrap_or(false)
    }

    /// Whether the stored answer for `qid` parses but falls outside the
    /// gate range. Unparseable input blocks navigation without showing
    /// the inline message.
    pub fn number_answer_out_of_range(&self, qid: u32) -> bool {
        match self
            .answers
            .get(&qid)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
        {
            Some(n) => n < FIRST_ANSWER_MIN || n > FIRST_ANSWER_MAX,
            None => false,
        }
    }

    /// Reset the input widgets to reflect the current question: the
    /// number buffer mirrors the stored answer, the choice cursor sits
    /// on the stored selection.
    fn sync_question_widgets(&mut self) {
        let qid = self.current_question_id();
        let stored = self.answers.get(&qid).cloned();
        match self.current_question().map(|q| q.kind.clone()) {
            Some(QuestionKind::Number { .. }) => {
                self.input_mode = InputMode::NumberInput;
                self.number_input = stored.unwrap_or_default();
                self.choice_cursor = 0;
            }
            Some(QuestionKind::Radio { options }) => {
                self.input_mode = InputMode::ChoiceSelect;
                self.number_input.clear();
                self.choice_cursor = stored
                    .and_then(|raw| options.iter().position(|o| o.value == raw))
                    .unwrap_or(0);
            }
            None => {}
        }
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
