//! # Content Container
//!
//! The host side of the render contract. `DemoScreen` is the screen type the
//! terminal host puts on its stacks, and `ContainerSink` is the render sink
//! that remembers what the core last asked to show.
//!
//! The sink keeps a snapshot rather than a pointer into the stacks: a push
//! with `add_to_stack = false` renders a screen no stack owns.

use crate::core::config::ResolvedTab;
use crate::core::{Extras, RenderSink, Screen, ScreenId, Transition};

/// How many frames the transition indicator stays visible after a render.
const TRANSITION_FRAMES: u8 = 6;

#[derive(Debug, Clone)]
pub struct DemoScreen {
    id: ScreenId,
    pub title: String,
    pub body: String,
    pub level: usize,
    pub extras: Option<Extras>,
    pub last_result: Option<(i32, i32)>,
}

impl DemoScreen {
    /// Root screen for a configured tab.
    pub fn root(tab: &ResolvedTab) -> Self {
        Self {
            id: ScreenId::new(),
            title: tab.title.clone(),
            body: tab.body.clone(),
            level: 0,
            extras: None,
            last_result: None,
        }
    }

    /// A detail screen opened from `parent`.
    pub fn child_of(parent: &DemoScreen) -> Self {
        let level = parent.level + 1;
        Self {
            id: ScreenId::new(),
            title: format!("Detail {level}"),
            body: format!(
                "Opened from \"{}\". Esc goes back to it; switching tabs keeps this screen on top.",
                parent.title
            ),
            level,
            extras: None,
            last_result: None,
        }
    }
}

impl Screen for DemoScreen {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn set_extras(&mut self, extras: Extras) {
        self.extras = Some(extras);
    }

    fn extras(&self) -> Option<&Extras> {
        self.extras.as_ref()
    }

    fn on_result(&mut self, request_code: i32, result_code: i32, _payload: Option<&Extras>) {
        self.last_result = Some((request_code, result_code));
    }
}

/// What the container currently shows.
#[derive(Debug, Clone)]
pub struct Displayed {
    pub screen: DemoScreen,
    pub transition: Transition,
}

#[derive(Debug, Default)]
pub struct ContainerSink {
    displayed: Option<Displayed>,
    transition_frames: u8,
    render_count: usize,
}

impl ContainerSink {
    pub fn displayed(&self) -> Option<&Displayed> {
        self.displayed.as_ref()
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// The transition to advertise this frame, if it is still fresh.
    pub fn active_transition(&self) -> Option<Transition> {
        match &self.displayed {
            Some(d) if self.transition_frames > 0 && d.transition != Transition::None => {
                Some(d.transition)
            }
            _ => None,
        }
    }

    /// Advances the transition indicator by one frame. Returns true while it is still showing.
    pub fn tick(&mut self) -> bool {
        self.transition_frames = self.transition_frames.saturating_sub(1);
        self.transition_frames > 0
    }
}

impl RenderSink<DemoScreen> for ContainerSink {
    fn render(&mut self, screen: &DemoScreen, transition: Transition) {
        log::debug!("Container shows {} ({})", screen.id(), transition.label());
        self.displayed = Some(Displayed {
            screen: screen.clone(),
            transition,
        });
        self.transition_frames = TRANSITION_FRAMES;
        self.render_count += 1;
    }
}
