use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{ReleaseError, Result};
use crate::git::{CommandRunner, HistorySource};

/// Mock history source returning fixed text
pub struct MockHistory {
    log: String,
}

impl MockHistory {
    pub fn new(log: impl Into<String>) -> Self {
        MockHistory { log: log.into() }
    }
}

impl HistorySource for MockHistory {
    fn raw_log(&self) -> Result<String> {
        Ok(self.log.clone())
    }
}

/// Mock command runner that records invocations
pub struct MockCommandRunner {
    output: std::result::Result<String, String>,
    queued: Mutex<VecDeque<std::result::Result<String, String>>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockCommandRunner {
    /// Runner whose every invocation succeeds with `output`
    pub fn new(output: impl Into<String>) -> Self {
        MockCommandRunner {
            output: Ok(output.into()),
            queued: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Runner whose every invocation fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        MockCommandRunner {
            output: Err(reason.into()),
            queued: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail the next unanswered invocation with `reason` before falling back
    /// to the fixed output
    pub fn fail_next(self, reason: impl Into<String>) -> Self {
        if let Ok(mut queued) = self.queued.lock() {
            queued.push_back(Err(reason.into()));
        }
        self
    }

    /// Recorded `(program, args)` pairs
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
        }

        let queued = self.queued.lock().ok().and_then(|mut q| q.pop_front());
        queued
            .unwrap_or_else(|| self.output.clone())
            .map_err(|reason| ReleaseError::command(program, reason))
    }
}
