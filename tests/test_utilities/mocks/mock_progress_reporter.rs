use dashboard_sync::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter that keeps reports, errors and completions apart
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    reports: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
    completions: Arc<Mutex<Vec<String>>>,
    progress: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }

    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.progress.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.reports.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.lock().unwrap().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.completions.lock().unwrap().push(message.to_string());
    }
}
