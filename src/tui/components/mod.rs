//! # TUI Components
//!
//! All UI components for the terminal host. They are stateless and
//! props-based: `ui::draw_ui` builds each one from the navigation
//! controller every frame and renders it.
//!
//! - `TabBar`: the tab strip (hidden when the controller says so)
//! - `ScreenView`: the content container, showing the last rendered screen
//! - `StatusBar`: active tab, depth, transition and key help
//!
//! Each component file holds its props, rendering logic and tests.

pub mod screen_view;
pub mod status_bar;
pub mod tab_bar;

pub use screen_view::ScreenView;
pub use status_bar::StatusBar;
pub use tab_bar::{TabBar, TabLabel};
