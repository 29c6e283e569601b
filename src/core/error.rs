use std::fmt;

use super::state::TabId;

/// Errors raised by the navigation core.
///
/// Every variant is a broken caller contract rather than a condition caused
/// by user input, so none of them is retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Pop requested on a stack that has no screen to reveal (depth <= 1).
    InvalidPop { tab: TabId, depth: usize },
    /// The tab identifier was never registered.
    UnregisteredTab(TabId),
    /// A tab was addressed by a position past the last declared tab.
    TabIndexOutOfRange { index: usize, len: usize },
    /// A stack was observed with zero screens.
    EmptyStack(TabId),
    /// The builder was asked to do something outside its one-shot setup.
    BuilderMisuse(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidPop { tab, depth } => {
                write!(f, "cannot pop tab '{tab}' at depth {depth}: the root screen is unpoppable")
            }
            NavigationError::UnregisteredTab(tab) => write!(f, "tab '{tab}' is not registered"),
            NavigationError::TabIndexOutOfRange { index, len } => {
                write!(f, "no tab at index {index}: {len} tabs are registered")
            }
            NavigationError::EmptyStack(tab) => write!(f, "tab '{tab}' has an empty stack"),
            NavigationError::BuilderMisuse(msg) => write!(f, "builder misuse: {msg}"),
        }
    }
}

impl std::error::Error for NavigationError {}

pub type Result<T> = std::result::Result<T, NavigationError>;
