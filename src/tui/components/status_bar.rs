//! # StatusBar Component
//!
//! Bottom line showing where navigation is and what just happened.
//!
//! The text changes based on state, most important first so it survives
//! narrow terminals:
//!
//! 1. **Transition in flight**: `"Home · depth 2 | forward: slide-left-in → slide-right-out | …"`
//! 2. **Status message**: `"Home · depth 2 | Result 3 sent | …"`
//! 3. **Default**: `"Home · depth 2 | …"`
//!
//! The trailing `…` stands for the key help, dropped first when space runs out.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::Transition;
use crate::tui::component::Component;

const KEY_HELP: &str = "Enter push · Esc back · Tab switch · t tabs · r result · q quit";

pub struct StatusBar {
    pub tab: String,
    pub depth: usize,
    pub transition: Option<Transition>,
    pub status_message: String,
}

impl StatusBar {
    fn text(&self) -> String {
        let mut parts = vec![format!("{} · depth {}", self.tab, self.depth)];
        if let Some(transition) = self.transition
            && let Some((enter, exit)) = transition.animations()
        {
            parts.push(format!(
                "{}: {} → {}",
                transition.label(),
                enter.label(),
                exit.label()
            ));
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        parts.join(" | ")
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text();
        let help_fits = text.chars().count() + 3 + KEY_HELP.chars().count() <= area.width as usize;
        let mut spans = vec![Span::raw(text)];
        if help_fits {
            spans.push(Span::styled(
                format!(" | {KEY_HELP}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
