//! # Navigation Core
//!
//! Per-tab back-stacks and the rules for moving between them.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • TabStack per tab     │
//!                    │  • Controller + Builder │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ RenderSink::render(screen, transition)
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Tests    │      │   Other    │
//!     │   Host     │      │ (recording │      │   hosts    │
//!     │ (ratatui)  │      │   sink)    │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`screen`]: the `Screen` capability trait and `ScreenId`
//! - [`stack`]: `TabStack`, one tab's back-stack
//! - [`state`]: `NavigationState`, all stacks plus the active tab
//! - [`controller`]: `NavigationController`, the interactive operations
//! - [`builder`]: `NavigationBuilder`, one-shot setup
//! - [`action`]: the `Action` enum and `update()`
//! - [`transition`]: transitions and the `RenderSink` trait
//! - [`config`]: host configuration

pub mod action;
pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod screen;
pub mod stack;
pub mod state;
pub mod transition;

pub use action::{Action, Effect, update};
pub use builder::NavigationBuilder;
pub use controller::{BackOutcome, NavigationController};
pub use error::NavigationError;
pub use screen::{Extras, Screen, ScreenId};
pub use stack::TabStack;
pub use state::{NavigationState, TabId};
pub use transition::{Animation, RenderSink, Transition};
