//! Scripted confirmation prompts.
//!
//! [`ScriptedConfirm`] answers prompts from a queue of pre-recorded answers
//! and falls back to a default once the queue is empty. Every prompt is
//! recorded so tests can assert on what the user was asked.
//!
//! ## Example
//!
//! ```
//! use contactform_forms::Confirm;
//! use contactform_test::ScriptedConfirm;
//!
//! let mut prompt = ScriptedConfirm::new(true).then(false);
//! let handle = prompt.clone();
//!
//! assert!(!prompt.confirm("Reset?"));
//! assert!(prompt.confirm("Reset?"));
//! assert_eq!(handle.prompt_count(), 2);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use contactform_forms::Confirm;

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<bool>,
    default_answer: bool,
    prompts: Vec<String>,
}

/// A [`Confirm`] implementation that answers from a script.
///
/// Clones share the same script and prompt log via `Arc<Mutex<...>>`, so a
/// test can keep a handle after moving the prompt into a form.
#[derive(Debug, Clone)]
pub struct ScriptedConfirm {
    script: Arc<Mutex<Script>>,
}

impl ScriptedConfirm {
    /// Creates a prompt that always answers `default_answer`.
    pub fn new(default_answer: bool) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                default_answer,
                ..Script::default()
            })),
        }
    }

    /// Queues `answer` for the next unanswered prompt.
    #[must_use]
    pub fn then(self, answer: bool) -> Self {
        self.push_answer(answer);
        self
    }

    /// Queues `answer` for the next unanswered prompt.
    pub fn push_answer(&self, answer: bool) {
        self.script
            .lock()
            .expect("ScriptedConfirm lock poisoned")
            .answers
            .push_back(answer);
    }

    /// Returns every prompt shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.script
            .lock()
            .expect("ScriptedConfirm lock poisoned")
            .prompts
            .clone()
    }

    /// Returns the number of prompts shown so far.
    pub fn prompt_count(&self) -> usize {
        self.script
            .lock()
            .expect("ScriptedConfirm lock poisoned")
            .prompts
            .len()
    }

    /// Asserts that exactly `expected` prompts were shown.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_prompted(&self, expected: usize) {
        let actual = self.prompt_count();
        assert_eq!(
            actual, expected,
            "Expected {expected} confirmation prompt(s), but {actual} were shown"
        );
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        let mut script = self.script.lock().expect("ScriptedConfirm lock poisoned");
        script.prompts.push(message.to_string());
        let answer = script.answers.pop_front().unwrap_or(script.default_answer);
        tracing::debug!(message, answer, "confirmation prompt answered");
        answer
    }
}
