//! Mock summary model for testing the proxy without real API calls.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::SummaryError;
use crate::model::SummaryModel;

enum MockBehavior {
    Succeed,
    Overloaded,
    Fail,
}

/// A mock [`SummaryModel`] with a fixed outcome, recording calls.
pub struct MockModel {
    summary: String,
    behavior: MockBehavior,
    call_count: AtomicU32,
    last_prompt: Mutex<Option<String>>,
}

impl MockModel {
    /// A mock that always succeeds with the given summary.
    pub fn with_summary(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            behavior: MockBehavior::Succeed,
            call_count: AtomicU32::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// A mock that always reports the upstream as overloaded.
    pub fn overloaded() -> Self {
        Self {
            summary: String::new(),
            behavior: MockBehavior::Overloaded,
            call_count: AtomicU32::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// A mock that always fails with a server error.
    pub fn failing() -> Self {
        Self {
            summary: String::new(),
            behavior: MockBehavior::Fail,
            call_count: AtomicU32::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryModel for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn summarize(&self, prompt: &str) -> Result<String, SummaryError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match self.behavior {
            MockBehavior::Succeed => Ok(self.summary.clone()),
            MockBehavior::Overloaded => Err(SummaryError::Overloaded),
            MockBehavior::Fail => Err(SummaryError::ServerError("mock failure".into())),
        }
    }
}
