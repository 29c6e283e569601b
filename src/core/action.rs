//! # Actions
//!
//! Everything a host can ask of the navigation core becomes an `Action`.
//! User taps a tab? That's `Action::TabSelected(id)`.
//! Back button? That's `Action::Back`.
//!
//! `update()` applies one action to the controller and tells the host what,
//! if anything, it has to do next.
//!
//! ```text
//! Controller + Action  →  update()  →  Effect
//! ```
//!
//! Hosts can log every action and replay a session against a recording sink.

use log::debug;

use super::controller::{BackOutcome, NavigationController};
use super::error::Result;
use super::screen::{Extras, Screen};
use super::state::TabId;
use super::transition::RenderSink;

pub enum Action<S> {
    /// Programmatic tab switch.
    SwitchTab(TabId),
    /// Programmatic tab switch by declaration position.
    SwitchTabIndex(usize),
    /// The tab strip reported a selection.
    TabSelected(TabId),
    /// Push onto the active tab, animated.
    Push { screen: S, extras: Option<Extras> },
    /// Push with every knob exposed.
    PushTo {
        tab: TabId,
        screen: S,
        animate: bool,
        add_to_stack: bool,
        extras: Option<Extras>,
    },
    Pop,
    Back,
    ExternalResult {
        request_code: i32,
        result_code: i32,
        payload: Option<Extras>,
    },
    SetContentVisible(bool),
    ToggleContentVisible,
    Quit,
}

impl<S> Action<S> {
    fn name(&self) -> &'static str {
        match self {
            Action::SwitchTab(_) => "SwitchTab",
            Action::SwitchTabIndex(_) => "SwitchTabIndex",
            Action::TabSelected(_) => "TabSelected",
            Action::Push { .. } => "Push",
            Action::PushTo { .. } => "PushTo",
            Action::Pop => "Pop",
            Action::Back => "Back",
            Action::ExternalResult { .. } => "ExternalResult",
            Action::SetContentVisible(_) => "SetContentVisible",
            Action::ToggleContentVisible => "ToggleContentVisible",
            Action::Quit => "Quit",
        }
    }
}

/// What the host should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Close the host; navigation has nowhere left to go.
    Exit,
}

pub fn update<S: Screen, R: RenderSink<S>>(
    nav: &mut NavigationController<S, R>,
    action: Action<S>,
) -> Result<Effect> {
    debug!("Action: {}", action.name());
    match action {
        Action::SwitchTab(tab) => {
            nav.switch_tab(&tab)?;
        }
        Action::SwitchTabIndex(index) => {
            nav.switch_tab_index(index)?;
        }
        Action::TabSelected(tab) => {
            nav.on_tab_selected(&tab)?;
        }
        Action::Push { screen, extras } => {
            nav.push(screen, extras)?;
        }
        Action::PushTo {
            tab,
            screen,
            animate,
            add_to_stack,
            extras,
        } => {
            nav.push_screen(&tab, screen, animate, add_to_stack, extras)?;
        }
        Action::Pop => {
            nav.pop_screen()?;
        }
        Action::Back => {
            if nav.handle_back_gesture()? == BackOutcome::Exit {
                return Ok(Effect::Exit);
            }
        }
        Action::ExternalResult {
            request_code,
            result_code,
            payload,
        } => {
            nav.handle_external_result(request_code, result_code, payload.as_ref())?;
        }
        Action::SetContentVisible(visible) => nav.set_content_visible(visible),
        Action::ToggleContentVisible => {
            nav.toggle_content_visible();
        }
        Action::Quit => return Ok(Effect::Exit),
    }
    Ok(Effect::None)
}
