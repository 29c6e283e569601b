//! # Tab Stack
//!
//! Back-stack of screens for a single tab.
//!
//! ```text
//! top    ┌──────────┐  ← visible while the tab is active
//!        │ screen 3 │
//!        ├──────────┤
//!        │ screen 2 │
//!        ├──────────┤
//! bottom │  root    │  ← never popped
//!        └──────────┘
//! ```

use log::warn;

use super::error::{NavigationError, Result};
use super::screen::Screen;
use super::state::TabId;

/// Result of [`TabStack::push`]: the screen that should be rendered next.
pub enum Pushed<'a, S> {
    /// The screen now lives on the stack.
    Stacked(&'a S),
    /// The screen was not retained; it is rendered once and then dropped.
    Transient(S),
}

impl<S> Pushed<'_, S> {
    pub fn screen(&self) -> &S {
        match self {
            Pushed::Stacked(screen) => screen,
            Pushed::Transient(screen) => screen,
        }
    }
}

pub struct TabStack<S> {
    tab: TabId,
    screens: Vec<S>,
}

impl<S: Screen> TabStack<S> {
    pub fn new(tab: TabId) -> Self {
        Self {
            tab,
            screens: Vec::new(),
        }
    }

    /// Pushes `screen`, appending it only when `add_to_stack` is set.
    pub fn push(&mut self, screen: S, add_to_stack: bool) -> Pushed<'_, S> {
        if !add_to_stack {
            return Pushed::Transient(screen);
        }
        self.screens.push(screen);
        let top = self.screens.len() - 1;
        Pushed::Stacked(&self.screens[top])
    }

    /// Removes the top screen and returns the one it was covering.
    pub fn pop(&mut self) -> Result<&S> {
        let depth = self.screens.len();
        if depth < 2 {
            warn!("Refusing to pop tab '{}' at depth {}", self.tab, depth);
            return Err(NavigationError::InvalidPop {
                tab: self.tab.clone(),
                depth,
            });
        }
        self.screens.pop();
        self.peek_top()
    }

    pub fn peek_top(&self) -> Result<&S> {
        self.screens
            .last()
            .ok_or_else(|| NavigationError::EmptyStack(self.tab.clone()))
    }

    pub fn peek_top_mut(&mut self) -> Result<&mut S> {
        let tab = &self.tab;
        self.screens
            .last_mut()
            .ok_or_else(|| NavigationError::EmptyStack(tab.clone()))
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn root(&self) -> Option<&S> {
        self.screens.first()
    }

    /// Screens from bottom (root) to top.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.screens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestScreen;

    fn stack_of(names: &[&str]) -> TabStack<TestScreen> {
        let mut stack = TabStack::new(TabId::from("home"));
        for name in names {
            stack.push(TestScreen::new(name), true);
        }
        stack
    }

    #[test]
    fn test_push_returns_pushed_screen() {
        let mut stack = stack_of(&["root"]);
        let child = TestScreen::new("child");
        let id = child.id();
        let pushed = stack.push(child, true);
        assert_eq!(pushed.screen().id(), id);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_push_without_add_leaves_stack_alone() {
        let mut stack = stack_of(&["root"]);
        let pushed = stack.push(TestScreen::new("overlay"), false);
        assert!(matches!(pushed, Pushed::Transient(_)));
        assert_eq!(pushed.screen().name, "overlay");
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_pop_reveals_second_from_top() {
        let mut stack = stack_of(&["root", "a", "b"]);
        let revealed = stack.pop().unwrap();
        assert_eq!(revealed.name, "a");
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_pop_root_fails() {
        let mut stack = stack_of(&["root"]);
        let err = stack.pop().unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidPop {
                tab: TabId::from("home"),
                depth: 1
            }
        );
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut stack = stack_of(&[]);
        assert!(matches!(
            stack.pop(),
            Err(NavigationError::InvalidPop { depth: 0, .. })
        ));
    }

    #[test]
    fn test_peek_top_empty_is_error() {
        let stack = stack_of(&[]);
        assert!(matches!(
            stack.peek_top(),
            Err(NavigationError::EmptyStack(_))
        ));
    }

    #[test]
    fn test_peek_top_does_not_mutate() {
        let stack = stack_of(&["root", "a"]);
        assert_eq!(stack.peek_top().unwrap().name, "a");
        assert_eq!(stack.peek_top().unwrap().name, "a");
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_root_and_iter_order() {
        let stack = stack_of(&["root", "a", "b"]);
        assert_eq!(stack.root().unwrap().name, "root");
        let names: Vec<_> = stack.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["root", "a", "b"]);
    }

    #[test]
    fn test_depth_never_drops_below_one() {
        let mut stack = stack_of(&["root"]);
        let mut successful_pops = 0;
        for i in 0..10 {
            if i % 3 == 0 {
                stack.push(TestScreen::new("child"), true);
            } else if stack.pop().is_ok() {
                successful_pops += 1;
            }
            assert!(stack.depth() >= 1);
        }
        // 4 pushes on top of the root
        assert_eq!(stack.depth(), 1 + 4 - successful_pops);
    }
}
