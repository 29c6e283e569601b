//! # ScreenView Component
//!
//! Draws whatever the core last rendered into the content container:
//!
//! ```text
//! ┌ Detail 2 ───────────────────────────────┐
//! │ Home › Detail 1 › Detail 2              │
//! │                                         │
//! │ Opened from "Detail 1". Esc goes back…  │
//! │                                         │
//! │ extras: {"depth": 2, "parent": …}       │
//! │ last result: request 1, code -1         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The body is wrapped with `textwrap` to the inner width so long
//! descriptions from the config file read as paragraphs.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::Extras;
use crate::tui::component::Component;

pub struct ScreenView {
    pub title: String,
    pub body: String,
    /// Titles of the active tab's stack, bottom to top.
    pub breadcrumb: Vec<String>,
    pub extras: Option<Extras>,
    pub last_result: Option<(i32, i32)>,
}

impl ScreenView {
    fn lines(&self, inner_width: u16) -> Vec<Line<'static>> {
        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(Span::styled(self.breadcrumb.join(" › "), dim)),
            Line::default(),
        ];

        let width = (inner_width as usize).max(1);
        for paragraph in self.body.lines() {
            lines.extend(
                textwrap::wrap(paragraph, width)
                    .into_iter()
                    .map(|l| Line::from(l.into_owned())),
            );
        }

        if let Some(extras) = &self.extras {
            let json = serde_json::to_string(extras).unwrap_or_else(|e| format!("<{e}>"));
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("extras: ", dim),
                Span::raw(json),
            ]));
        }
        if let Some((request, code)) = self.last_result {
            lines.push(Line::from(vec![
                Span::styled("last result: ", dim),
                Span::raw(format!("request {request}, code {code}")),
            ]));
        }
        lines
    }
}

impl Component for ScreenView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        let inner_width = block.inner(area).width;
        let paragraph = Paragraph::new(self.lines(inner_width)).block(block);
        frame.render_widget(paragraph, area);
    }
}
