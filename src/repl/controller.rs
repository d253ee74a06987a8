//! REPL session state and the submission cycle.
//!
//! A [`ReplController`] owns the uncommitted input, the append-only
//! history, the loading flag and the evaluation mode. Each accepted
//! submission performs exactly one request and appends exactly one
//! [`HistoryEntry`]. While a request is in flight further submissions
//! are rejected, so completion order always equals submission order.

use std::cell::{Cell, Ref, RefCell};

use super::history::HistoryEntry;
use crate::query::{Completion, EvalMode, QueryTransport, evaluate};

/// Key presses understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter { shift: bool },
}

/// Why a submission was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing but whitespace.
    Empty,
    /// Another request is still in flight.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Appended to history at this index.
    Recorded(usize),
    Rejected(Rejection),
}

/// An accepted submission: where it landed and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluated {
    pub index: usize,
    pub completion: Completion,
}

/// Result of feeding a key to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key edited the input buffer.
    Edited,
    Submitted(SubmitOutcome),
}

/// Resets the loading flag when dropped, whatever path the submission took.
struct LoadingGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct ReplController<T> {
    transport: T,
    endpoint: String,
    input: RefCell<String>,
    history: RefCell<Vec<HistoryEntry>>,
    loading: Cell<bool>,
    mode: Cell<EvalMode>,
}

impl<T: QueryTransport> ReplController<T> {
    pub fn new(transport: T, endpoint: impl Into<String>, mode: EvalMode) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            input: RefCell::new(String::new()),
            history: RefCell::new(Vec::new()),
            loading: Cell::new(false),
            mode: Cell::new(mode),
        }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn input(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        *self.input.borrow_mut() = text.into();
    }

    pub fn history(&self) -> Ref<'_, [HistoryEntry]> {
        Ref::map(self.history.borrow(), Vec::as_slice)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn mode(&self) -> EvalMode {
        self.mode.get()
    }

    /// Takes effect from the next submission.
    pub fn set_mode(&self, mode: EvalMode) {
        self.mode.set(mode);
    }

    pub async fn handle_key(&self, key: Key) -> KeyOutcome {
        match key {
            Key::Char(c) => {
                self.input.borrow_mut().push(c);
                KeyOutcome::Edited
            }
            Key::Backspace => {
                self.input.borrow_mut().pop();
                KeyOutcome::Edited
            }
            Key::Enter { shift: true } => {
                self.input.borrow_mut().push('\n');
                KeyOutcome::Edited
            }
            Key::Enter { shift: false } => KeyOutcome::Submitted(self.submit_input().await),
        }
    }

    /// Submits whatever is currently in the input buffer.
    pub async fn submit_input(&self) -> SubmitOutcome {
        let expression = self.input();
        self.submit(&expression).await
    }

    pub async fn submit(&self, expression: &str) -> SubmitOutcome {
        match self.submit_evaluated(expression).await {
            Ok(evaluated) => SubmitOutcome::Recorded(evaluated.index),
            Err(rejection) => SubmitOutcome::Rejected(rejection),
        }
    }

    /// Like [`Self::submit`], also reporting how the evaluation ended.
    pub async fn submit_evaluated(&self, expression: &str) -> Result<Evaluated, Rejection> {
        let source = expression.trim();
        if source.is_empty() {
            return Err(Rejection::Empty);
        }
        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            return Err(Rejection::Busy);
        };

        let source = source.to_string();
        self.input.borrow_mut().clear();

        let request = self.mode.get().prepare(&self.endpoint, &source);
        tracing::debug!(mode = %self.mode.get(), source = %source, "Submitting expression");

        let outcome = evaluate(&self.transport, &request).await;
        let completion = outcome.completion();
        let entry = HistoryEntry::from_outcome(source, outcome);

        let mut history = self.history.borrow_mut();
        history.push(entry);
        Ok(Evaluated {
            index: history.len() - 1,
            completion,
        })
    }
}
