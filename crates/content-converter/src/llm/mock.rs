use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmOptions, LlmProvider};
use crate::errors::{ConvertError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Optimize { text: String, options: LlmOptions },
    Summary { text: String, max_length: usize },
}

/// A provider that returns canned replies and records what it was asked.
pub struct MockLlmProvider {
    optimized: String,
    summary: String,
    fail_optimize: bool,
    fail_summary: bool,
    calls: Mutex<Vec<MockCall>>,
}

impl MockLlmProvider {
    pub fn new(optimized: &str, summary: &str) -> Self {
        Self {
            optimized: optimized.to_string(),
            summary: summary.to_string(),
            fail_optimize: false,
            fail_summary: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with a provider error.
    pub fn failing() -> Self {
        Self {
            fail_optimize: true,
            fail_summary: true,
            ..Self::new("", "")
        }
    }

    /// Optimising succeeds, summarising fails.
    pub fn failing_summary(optimized: &str) -> Self {
        Self {
            fail_summary: true,
            ..Self::new(optimized, "")
        }
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) -> Result<()> {
        let fail = match call {
            MockCall::Optimize { .. } => self.fail_optimize,
            MockCall::Summary { .. } => self.fail_summary,
        };
        self.calls.lock().unwrap().push(call);
        if fail {
            return Err(ConvertError::provider("Mock", "API error"));
        }
        Ok(())
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "Mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn optimize_content(&self, text: &str, options: &LlmOptions) -> Result<String> {
        self.record(MockCall::Optimize {
            text: text.to_string(),
            options: options.clone(),
        })?;
        Ok(self.optimized.clone())
    }

    async fn generate_summary(&self, text: &str, max_length: usize) -> Result<String> {
        self.record(MockCall::Summary {
            text: text.to_string(),
            max_length,
        })?;
        Ok(self.summary.clone())
    }
}
