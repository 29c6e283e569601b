//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::screen::{Extras, Screen, ScreenId};
use crate::core::transition::{RenderSink, Transition};

/// A screen that remembers its extras and every result it receives.
#[derive(Debug)]
pub struct TestScreen {
    id: ScreenId,
    pub name: String,
    pub extras: Option<Extras>,
    pub results: Vec<(i32, i32)>,
}

impl TestScreen {
    pub fn new(name: &str) -> Self {
        Self {
            id: ScreenId::new(),
            name: name.to_string(),
            extras: None,
            results: Vec::new(),
        }
    }
}

impl Screen for TestScreen {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn set_extras(&mut self, extras: Extras) {
        self.extras = Some(extras);
    }

    fn extras(&self) -> Option<&Extras> {
        self.extras.as_ref()
    }

    fn on_result(&mut self, request_code: i32, result_code: i32, _payload: Option<&Extras>) {
        self.results.push((request_code, result_code));
    }
}

/// Render sink that records every request in order.
#[derive(Default)]
pub struct RecordingSink {
    pub renders: Vec<(ScreenId, Transition)>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<(ScreenId, Transition)> {
        self.renders.last().copied()
    }

    pub fn clear(&mut self) {
        self.renders.clear();
    }
}

impl RenderSink<TestScreen> for RecordingSink {
    fn render(&mut self, screen: &TestScreen, transition: Transition) {
        self.renders.push((screen.id(), transition));
    }
}
