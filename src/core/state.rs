//! # Navigation State
//!
//! Every tab's stack, the order tabs were declared in, and which tab is active.
//!
//! ```text
//! NavigationState
//! ├── tabs: HashMap<TabId, TabEntry>   // one stack + icon per tab
//! ├── order: Vec<TabId>                // declaration order (tab strip order)
//! └── active: Option<TabId>            // None until the builder finishes
//! ```
//!
//! Only the controller and builder mutate this. Once `active` is set it
//! always names a key of `tabs`.

use std::collections::HashMap;
use std::fmt;

use super::error::{NavigationError, Result};
use super::screen::Screen;
use super::stack::TabStack;

/// Unique identifier of a tab. Doubles as its label in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A registered tab: its stack plus the icon the tab strip shows.
pub struct TabEntry<S> {
    pub stack: TabStack<S>,
    pub icon: String,
}

pub struct NavigationState<S> {
    tabs: HashMap<TabId, TabEntry<S>>,
    order: Vec<TabId>,
    active: Option<TabId>,
}

impl<S: Screen> Default for NavigationState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen> NavigationState<S> {
    pub fn new() -> Self {
        Self {
            tabs: HashMap::new(),
            order: Vec::new(),
            active: None,
        }
    }

    /// Creates an empty stack for `tab`. Re-registering replaces the old stack.
    pub fn register(&mut self, tab: TabId, icon: String) {
        if !self.tabs.contains_key(&tab) {
            self.order.push(tab.clone());
        }
        let stack = TabStack::new(tab.clone());
        self.tabs.insert(tab, TabEntry { stack, icon });
    }

    pub fn contains(&self, tab: &TabId) -> bool {
        self.tabs.contains_key(tab)
    }

    pub fn entry(&self, tab: &TabId) -> Result<&TabEntry<S>> {
        self.tabs
            .get(tab)
            .ok_or_else(|| NavigationError::UnregisteredTab(tab.clone()))
    }

    pub fn stack(&self, tab: &TabId) -> Result<&TabStack<S>> {
        self.entry(tab).map(|e| &e.stack)
    }

    pub fn stack_mut(&mut self, tab: &TabId) -> Result<&mut TabStack<S>> {
        self.tabs
            .get_mut(tab)
            .map(|e| &mut e.stack)
            .ok_or_else(|| NavigationError::UnregisteredTab(tab.clone()))
    }

    pub fn active(&self) -> Option<&TabId> {
        self.active.as_ref()
    }

    /// Marks `tab` active. Fails if it was never registered.
    pub fn set_active(&mut self, tab: &TabId) -> Result<()> {
        if !self.contains(tab) {
            return Err(NavigationError::UnregisteredTab(tab.clone()));
        }
        self.active = Some(tab.clone());
        Ok(())
    }

    fn active_id(&self) -> Result<&TabId> {
        self.active.as_ref().ok_or_else(|| {
            NavigationError::BuilderMisuse("no active tab before build completes".into())
        })
    }

    pub fn active_stack(&self) -> Result<&TabStack<S>> {
        let tab = self.active_id()?;
        self.stack(tab)
    }

    pub fn active_stack_mut(&mut self) -> Result<&mut TabStack<S>> {
        let tab = self.active_id()?.clone();
        self.stack_mut(&tab)
    }

    /// Tab identifiers in declaration order.
    pub fn order(&self) -> &[TabId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
