//! Incremental matching of typed characters against an [`Assignment`].
//!
//! The caller owns an [`InputState`] for the length of one selection attempt
//! and feeds it one [`KeyInput`] at a time through [`step`].

use crate::acekey::Assignment;
use log::trace;

/// Typed-so-far buffer plus the last rejected character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    warning: Option<char>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn warning(&self) -> Option<char> {
        self.warning
    }

    pub fn warning_message(&self) -> Option<String> {
        self.warning
            .map(|ch| format!("no shortcut continues with {ch:?}"))
    }

    /// Idempotent; the matcher also clears the warning on the next valid key.
    pub fn clear_warning(&mut self) {
        self.warning = None;
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.warning = None;
    }
}

/// One event of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Cancel,
}

/// What a single [`step`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'a, Id> {
    /// Nothing typed.
    Empty,
    /// The buffer is a strict prefix of at least one binding.
    Partial(String),
    /// The buffer completed a binding; the state has been reset.
    Matched(&'a Id),
    /// `ch` extends no binding; the buffer is left as it was.
    Rejected { ch: char, buffer: String },
}

fn resting<'a, Id>(state: &InputState) -> MatchOutcome<'a, Id> {
    if state.buffer.is_empty() {
        MatchOutcome::Empty
    } else {
        MatchOutcome::Partial(state.buffer.clone())
    }
}

/// Advances `state` by one input.
pub fn step<'a, Id: PartialEq>(
    assignment: &'a Assignment<Id>,
    state: &mut InputState,
    input: KeyInput,
) -> MatchOutcome<'a, Id> {
    match input {
        KeyInput::Char(ch) => {
            let mut candidate = state.buffer.clone();
            candidate.push(ch);
            if let Some(id) = assignment.entity_for(&candidate) {
                trace!("{candidate:?} matched");
                state.reset();
                return MatchOutcome::Matched(id);
            }
            if assignment.has_extension(&candidate) {
                state.buffer = candidate;
                state.warning = None;
                return MatchOutcome::Partial(state.buffer.clone());
            }
            trace!("{ch:?} rejected after {:?}", state.buffer);
            state.warning = Some(ch);
            MatchOutcome::Rejected {
                ch,
                buffer: state.buffer.clone(),
            }
        }
        KeyInput::Backspace => {
            state.buffer.pop();
            state.warning = None;
            resting(state)
        }
        KeyInput::Cancel => {
            state.reset();
            MatchOutcome::Empty
        }
    }
}

/// Feeds `keys` one character at a time, stopping at the first match or rejection.
pub fn step_all<'a, Id: PartialEq>(
    assignment: &'a Assignment<Id>,
    state: &mut InputState,
    keys: &str,
) -> MatchOutcome<'a, Id> {
    let mut outcome = resting(state);
    for ch in keys.chars() {
        outcome = step(assignment, state, KeyInput::Char(ch));
        if matches!(outcome, MatchOutcome::Matched(_) | MatchOutcome::Rejected { .. }) {
            break;
        }
    }
    outcome
}
