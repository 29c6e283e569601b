//! # Screens
//!
//! A screen is whatever a tab stack holds. The core only needs a stable
//! identity, a place to hang the extras passed at push time, and a hook to
//! receive results forwarded by the host.

use std::fmt;

use uuid::Uuid;

/// Free-form payload handed to a screen when it is pushed.
pub type Extras = serde_json::Map<String, serde_json::Value>;

/// Identity of a screen instance. Two screens with equal ids are the same screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(Uuid);

impl ScreenId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is enough to tell screens apart in logs.
        let s = self.0.to_string();
        write!(f, "{}", &s[..8])
    }
}

/// Capability interface every screen implements.
pub trait Screen {
    /// Stable identity of this screen instance.
    fn id(&self) -> ScreenId;

    /// Called with the extras given at push time, before the screen is stored or rendered.
    fn set_extras(&mut self, _extras: Extras) {}

    /// The extras previously attached, if the screen keeps them.
    fn extras(&self) -> Option<&Extras> {
        None
    }

    /// Receives an asynchronous result forwarded by the host while this screen is on top.
    fn on_result(&mut self, _request_code: i32, _result_code: i32, _payload: Option<&Extras>) {}
}
