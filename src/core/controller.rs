//! # Navigation Controller
//!
//! The interactive half of the navigation core. Obtained from
//! [`NavigationBuilder::build`](super::builder::NavigationBuilder::build);
//! there is no way to construct one with zero tabs or without an active tab.
//!
//! Every navigating operation issues exactly one render request:
//!
//! | operation            | stack change        | render                 |
//! |----------------------|---------------------|------------------------|
//! | `switch_tab`         | none                | active top, `None`     |
//! | `push_screen`        | append if requested | pushed, `Forward`/`None` |
//! | `pop_screen`         | remove top          | revealed, `Backward`   |
//! | `handle_back_gesture`| as `pop_screen`     | none when exiting      |

use log::{debug, info, warn};

use super::error::{NavigationError, Result};
use super::screen::{Extras, Screen, ScreenId};
use super::state::{NavigationState, TabEntry, TabId};
use super::transition::{RenderSink, Transition};

/// What a back gesture resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The active tab is at its root; the host should close.
    Exit,
    /// The top screen was popped and this one revealed.
    Popped(ScreenId),
}

pub struct NavigationController<S, R> {
    pub(super) state: NavigationState<S>,
    pub(super) renderer: R,
    content_visible: bool,
}

impl<S: Screen, R: RenderSink<S>> NavigationController<S, R> {
    pub(super) fn new(state: NavigationState<S>, renderer: R) -> Self {
        Self {
            state,
            renderer,
            content_visible: true,
        }
    }

    /// Makes `tab` active and reveals its current top without animation.
    pub fn switch_tab(&mut self, tab: &TabId) -> Result<ScreenId> {
        self.on_tab_selected(tab)
    }

    /// Same as [`switch_tab`](Self::switch_tab), addressing the tab by declaration position.
    pub fn switch_tab_index(&mut self, index: usize) -> Result<ScreenId> {
        let order = self.state.order();
        let tab = order
            .get(index)
            .cloned()
            .ok_or(NavigationError::TabIndexOutOfRange {
                index,
                len: order.len(),
            })?;
        self.switch_tab(&tab)
    }

    /// Tab-strip handler: a tab was selected by the user.
    ///
    /// Reveals the prior state of the tab; never pushes a new entry. The
    /// handler exists only on a built controller, so the tab strip can't
    /// report a selection before every stack is seeded.
    pub fn on_tab_selected(&mut self, tab: &TabId) -> Result<ScreenId> {
        // Validate before touching the active pointer.
        self.state.stack(tab)?.peek_top()?;
        self.state.set_active(tab)?;

        let screen = self.state.stack(tab)?.peek_top()?;
        let id = screen.id();
        debug!("Switched to tab '{}', revealing {}", tab, id);
        self.renderer.render(screen, Transition::None);
        Ok(id)
    }

    /// Renders `screen` into the shared container, appending it to `tab`'s
    /// stack when `add_to_stack` is set.
    pub fn push_screen(
        &mut self,
        tab: &TabId,
        mut screen: S,
        animate: bool,
        add_to_stack: bool,
        extras: Option<Extras>,
    ) -> Result<ScreenId> {
        if let Some(active) = self.state.active()
            && active != tab
        {
            warn!("Pushing into inactive tab '{}' while '{}' is active", tab, active);
        }
        let stack = self.state.stack_mut(tab)?;
        if let Some(extras) = extras {
            screen.set_extras(extras);
        }
        let transition = if animate {
            Transition::Forward
        } else {
            Transition::None
        };

        let pushed = stack.push(screen, add_to_stack);
        let id = pushed.screen().id();
        debug!(
            "Pushed {} onto '{}' (animate={}, add_to_stack={})",
            id, tab, animate, add_to_stack
        );
        self.renderer.render(pushed.screen(), transition);
        Ok(id)
    }

    /// Pushes onto the active tab, animated and retained.
    pub fn push(&mut self, screen: S, extras: Option<Extras>) -> Result<ScreenId> {
        let tab = self.require_active()?.clone();
        self.push_screen(&tab, screen, true, true, extras)
    }

    /// Pops the active tab's top screen and renders the one it reveals.
    pub fn pop_screen(&mut self) -> Result<ScreenId> {
        let revealed = self.state.active_stack_mut()?.pop()?;
        let id = revealed.id();
        debug!("Popped active tab, revealing {}", id);
        self.renderer.render(revealed, Transition::Backward);
        Ok(id)
    }

    /// Back gesture: exit at the root, otherwise pop.
    pub fn handle_back_gesture(&mut self) -> Result<BackOutcome> {
        if self.state.active_stack()?.depth() == 1 {
            info!("Back gesture at root of '{}', exiting", self.require_active()?);
            return Ok(BackOutcome::Exit);
        }
        self.pop_screen().map(BackOutcome::Popped)
    }

    /// Forwards a host result to the active tab's top screen.
    ///
    /// Returns `false` without error when the stack is empty.
    pub fn handle_external_result(
        &mut self,
        request_code: i32,
        result_code: i32,
        payload: Option<&Extras>,
    ) -> Result<bool> {
        let stack = self.state.active_stack_mut()?;
        if stack.is_empty() {
            warn!("Dropping external result {}: active stack is empty", request_code);
            return Ok(false);
        }
        let top = stack.peek_top_mut()?;
        debug!(
            "Forwarding result (request={}, result={}) to {}",
            request_code,
            result_code,
            top.id()
        );
        top.on_result(request_code, result_code, payload);
        Ok(true)
    }

    pub fn is_content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn set_content_visible(&mut self, visible: bool) {
        self.content_visible = visible;
    }

    pub fn toggle_content_visible(&mut self) -> bool {
        self.content_visible = !self.content_visible;
        self.content_visible
    }

    pub fn active_tab(&self) -> Option<&TabId> {
        self.state.active()
    }

    /// The screen currently due for display: top of the active stack.
    pub fn current_screen(&self) -> Result<&S> {
        self.state.active_stack()?.peek_top()
    }

    /// Tab identifiers in declaration order.
    pub fn tab_ids(&self) -> &[TabId] {
        self.state.order()
    }

    pub fn tab(&self, tab: &TabId) -> Result<&TabEntry<S>> {
        self.state.entry(tab)
    }

    pub fn depth(&self, tab: &TabId) -> Result<usize> {
        self.state.stack(tab).map(|s| s.depth())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Ends the navigation session, dropping every stack.
    pub fn tear_down(self) -> R {
        info!("Tearing down navigation with {} tabs", self.state.len());
        self.renderer
    }

    fn require_active(&self) -> Result<&TabId> {
        self.state.active().ok_or_else(|| {
            NavigationError::BuilderMisuse("navigation used before build completed".into())
        })
    }
}
