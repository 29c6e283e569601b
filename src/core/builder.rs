//! # Navigation Builder
//!
//! One-shot setup for a [`NavigationController`]:
//!
//! ```text
//! register_tab(A) ─┐
//! register_tab(B) ─┼─► build() ──► reverse ──► seed C, B, A ──► activate A ──► controller
//! register_tab(C) ─┘                          (each root rendered,
//!                                              A's ends up visible)
//! ```
//!
//! Seeding walks the declarations backwards, so the first declared tab is
//! the last one rendered and the one left active. Embedding apps rely on the
//! first declared tab being the one shown after setup, so keep the reversal.
//!
//! `build` consumes the builder; there is nothing left to reuse afterwards.

use log::{debug, info};

use super::controller::NavigationController;
use super::error::{NavigationError, Result};
use super::screen::Screen;
use super::state::{NavigationState, TabId};
use super::transition::RenderSink;

struct TabDeclaration<S> {
    tab: TabId,
    root: S,
    icon: String,
}

pub struct NavigationBuilder<S, R> {
    renderer: R,
    declarations: Vec<TabDeclaration<S>>,
}

impl<S: Screen, R: RenderSink<S>> NavigationBuilder<S, R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            declarations: Vec::new(),
        }
    }

    /// Declares a tab with its root screen and icon.
    ///
    /// Declaring the same id twice keeps the first position but the latest
    /// root screen and icon.
    pub fn register_tab(mut self, tab: impl Into<TabId>, root: S, icon: impl Into<String>) -> Self {
        let declaration = TabDeclaration {
            tab: tab.into(),
            root,
            icon: icon.into(),
        };
        match self
            .declarations
            .iter_mut()
            .find(|d| d.tab == declaration.tab)
        {
            Some(existing) => {
                debug!("Tab '{}' declared again, replacing", declaration.tab);
                *existing = declaration;
            }
            None => {
                debug!("Declared tab '{}'", declaration.tab);
                self.declarations.push(declaration);
            }
        }
        self
    }

    /// Seeds every tab's stack and returns the interactive controller.
    pub fn build(self) -> Result<NavigationController<S, R>> {
        let Self {
            renderer,
            mut declarations,
        } = self;

        if declarations.is_empty() {
            return Err(NavigationError::BuilderMisuse(
                "build() called with no tabs registered".into(),
            ));
        }

        let mut state = NavigationState::new();
        for declaration in &declarations {
            state.register(declaration.tab.clone(), declaration.icon.clone());
        }
        let mut controller = NavigationController::new(state, renderer);

        declarations.reverse();
        let mut last_seeded = None;
        for TabDeclaration { tab, root, .. } in declarations {
            controller.push_screen(&tab, root, false, true, None)?;
            last_seeded = Some(tab);
        }

        if let Some(tab) = last_seeded {
            controller.state.set_active(&tab)?;
            info!(
                "Navigation built with {} tabs, '{}' active",
                controller.state.len(),
                tab
            );
        }
        Ok(controller)
    }
}
