//! # TUI Host
//!
//! The ratatui-specific layer. Plays the "surrounding UI toolkit" for the
//! navigation core: it registers the configured tabs, draws the tab strip
//! and content container, and turns key presses and clicks into
//! `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Transition in flight**: redraws every ~80ms until the indicator expires.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
pub mod container;
mod event;
mod ui;

use log::{info, warn};
use serde_json::json;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::{Action, Effect, Extras, NavigationBuilder, RenderSink, Transition, update};
use crate::tui::container::{ContainerSink, DemoScreen};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Navigator;

/// TUI-specific presentation state (not part of the navigation core)
#[derive(Debug, Default)]
pub struct TuiState {
    pub status_message: String,
    /// Where the tab strip was last drawn, for click hit testing. None = hidden.
    pub tab_bar_area: Option<ratatui::layout::Rect>,
    /// Request code for the next synthetic external result.
    pub next_request_code: i32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            next_request_code: 1,
            ..Default::default()
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Registers the configured tabs and builds the controller.
pub fn build_navigator(config: &ResolvedConfig) -> io::Result<Navigator> {
    let mut builder = NavigationBuilder::new(ContainerSink::default());
    for tab in &config.tabs {
        builder = builder.register_tab(tab.id.as_str(), DemoScreen::root(tab), tab.icon.clone());
    }
    let mut nav = builder.build().map_err(io::Error::other)?;
    nav.set_content_visible(config.show_tabs);
    Ok(nav)
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut nav = build_navigator(&config)?;
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true; // Force first frame
        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &nav, &mut tui))?;
                needs_redraw = false;
            }

            let animating = nav.renderer_mut().tick();
            if animating {
                needs_redraw = true;
            }
            let timeout = if animating {
                Duration::from_millis(80)
            } else {
                Duration::from_millis(500)
            };

            // Process first event + drain ALL pending events before next draw
            let first_event = poll_event_timeout(timeout)?;
            if first_event.is_some() {
                needs_redraw = true;
            }
            let mut pending = first_event;
            while let Some(event) = pending {
                if handle_event(&mut nav, &mut tui, event) == Effect::Exit {
                    info!("Exit requested, leaving event loop");
                    return Ok(());
                }
                pending = poll_event_immediate()?;
            }
        }
    });
    ratatui::restore();

    let sink = nav.tear_down();
    info!("Session ended after {} renders", sink.render_count());
    result
}

/// Applies one terminal event. Navigation errors are reported in the status line.
fn handle_event(nav: &mut Navigator, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let refresh_after = matches!(event, TuiEvent::SendResult);
    let Some(action) = action_for(nav, tui, event) else {
        return Effect::None;
    };

    match update(nav, action) {
        Ok(effect) => {
            if refresh_after {
                refresh_container(nav);
            }
            effect
        }
        Err(e) => {
            warn!("Navigation error: {}", e);
            tui.status_message = e.to_string();
            Effect::None
        }
    }
}

/// Translates a terminal event into a core action, if it maps to one.
fn action_for(nav: &Navigator, tui: &mut TuiState, event: TuiEvent) -> Option<Action<DemoScreen>> {
    let tab_count = nav.tab_ids().len();
    let active_index = nav
        .active_tab()
        .and_then(|active| nav.tab_ids().iter().position(|id| id == active))
        .unwrap_or(0);

    match event {
        TuiEvent::Back => {
            tui.status_message.clear();
            Some(Action::Back)
        }
        TuiEvent::Push => {
            let parent = nav.current_screen().ok()?;
            let child = DemoScreen::child_of(parent);
            let mut extras = Extras::new();
            extras.insert("parent".into(), json!(parent.title));
            extras.insert("depth".into(), json!(child.level));
            tui.status_message = format!("Opened {}", child.title);
            Some(Action::Push {
                screen: child,
                extras: Some(extras),
            })
        }
        TuiEvent::NextTab if tab_count > 0 => {
            let next = (active_index + 1) % tab_count;
            Some(Action::TabSelected(nav.tab_ids()[next].clone()))
        }
        TuiEvent::PrevTab if tab_count > 0 => {
            let prev = (active_index + tab_count - 1) % tab_count;
            Some(Action::TabSelected(nav.tab_ids()[prev].clone()))
        }
        TuiEvent::SelectTab(index) => Some(Action::SwitchTabIndex(index)),
        TuiEvent::ToggleTabs => Some(Action::ToggleContentVisible),
        TuiEvent::SendResult => {
            let request_code = tui.next_request_code;
            tui.next_request_code += 1;
            let mut payload = Extras::new();
            payload.insert("source".into(), json!("terminal"));
            tui.status_message = format!("Result {request_code} sent");
            Some(Action::ExternalResult {
                request_code,
                result_code: -1,
                payload: Some(payload),
            })
        }
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::MouseClick(column, row) => {
            let area = tui.tab_bar_area?;
            if row != area.y {
                return None;
            }
            let index = ui::tab_bar(nav).hit_test(area, column)?;
            Some(Action::TabSelected(nav.tab_ids()[index].clone()))
        }
        TuiEvent::NextTab | TuiEvent::PrevTab | TuiEvent::Resize => None,
    }
}

/// Re-renders the active top in place so changes made by `on_result` show up.
fn refresh_container(nav: &mut Navigator) {
    if let Ok(top) = nav.current_screen() {
        let top = top.clone();
        nav.renderer_mut().render(&top, Transition::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TabId;
    use crate::core::config::{CliOverrides, TabnavConfig, resolve_with_env};

    fn nav() -> Navigator {
        let config =
            resolve_with_env(&TabnavConfig::default(), &CliOverrides::default(), |_| None);
        build_navigator(&config).unwrap()
    }

    #[test]
    fn test_build_navigator_uses_configured_order() {
        let nav = nav();
        assert_eq!(
            nav.tab_ids(),
            &[TabId::from("Home"), TabId::from("Search"), TabId::from("Profile")]
        );
        assert_eq!(nav.active_tab(), Some(&TabId::from("Home")));
    }

    #[test]
    fn test_push_then_back_round_trip() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        let root = nav.current_screen().unwrap().title.clone();

        assert_eq!(handle_event(&mut nav, &mut tui, TuiEvent::Push), Effect::None);
        let top = nav.current_screen().unwrap();
        assert_eq!(top.title, "Detail 1");
        assert_eq!(top.extras.as_ref().unwrap()["parent"], json!(root.as_str()));

        assert_eq!(handle_event(&mut nav, &mut tui, TuiEvent::Back), Effect::None);
        assert_eq!(nav.current_screen().unwrap().title, root);
        assert_eq!(handle_event(&mut nav, &mut tui, TuiEvent::Back), Effect::Exit);
    }

    #[test]
    fn test_next_and_prev_tab_wrap() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::PrevTab);
        assert_eq!(nav.active_tab(), Some(&TabId::from("Profile")));
        handle_event(&mut nav, &mut tui, TuiEvent::NextTab);
        assert_eq!(nav.active_tab(), Some(&TabId::from("Home")));
    }

    #[test]
    fn test_tab_switch_keeps_history() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::Push);
        handle_event(&mut nav, &mut tui, TuiEvent::SelectTab(1));
        handle_event(&mut nav, &mut tui, TuiEvent::SelectTab(0));
        assert_eq!(nav.current_screen().unwrap().title, "Detail 1");
        assert_eq!(
            nav.renderer().displayed().unwrap().transition,
            Transition::None
        );
    }

    #[test]
    fn test_bad_tab_index_reported_in_status() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::SelectTab(8));
        assert!(tui.status_message.contains("no tab at index 8"));
        assert_eq!(nav.active_tab(), Some(&TabId::from("Home")));
    }

    #[test]
    fn test_send_result_refreshes_container() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::SendResult);
        assert_eq!(nav.current_screen().unwrap().last_result, Some((1, -1)));
        let shown = nav.renderer().displayed().unwrap();
        assert_eq!(shown.screen.last_result, Some((1, -1)));
        assert_eq!(tui.next_request_code, 2);
    }

    #[test]
    fn test_toggle_tabs() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::ToggleTabs);
        assert!(!nav.is_content_visible());
    }

    #[test]
    fn test_click_on_tab_strip_selects_tab() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        let area = ratatui::layout::Rect::new(0, 0, 90, 1);
        tui.tab_bar_area = Some(area);
        // First column the strip maps to the third tab.
        let column = (0..area.width)
            .find(|&c| ui::tab_bar(&nav).hit_test(area, c) == Some(2))
            .unwrap();
        handle_event(&mut nav, &mut tui, TuiEvent::MouseClick(column, 0));
        assert_eq!(nav.active_tab(), Some(&TabId::from("Profile")));
    }

    #[test]
    fn test_click_ignored_when_tabs_hidden() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::MouseClick(3, 0));
        assert_eq!(nav.active_tab(), Some(&TabId::from("Home")));
    }

    #[test]
    fn test_quit_exits() {
        let mut nav = nav();
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&mut nav, &mut tui, TuiEvent::Quit), Effect::Exit);
    }
}
