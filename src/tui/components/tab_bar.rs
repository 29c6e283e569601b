//! # TabBar Component
//!
//! One-line tab strip: ` ⌂ Home │ ⌕ Search │ ☺ Profile `, active tab reversed.
//!
//! Each tab gets at most an equal share of the width; longer labels are cut
//! with `…` by display width (icons are often wide glyphs). The same layout
//! drives [`TabBar::hit_test`] so mouse clicks land on what was drawn.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;

const SEPARATOR: &str = "│";

#[derive(Debug, Clone)]
pub struct TabLabel {
    pub icon: String,
    pub label: String,
}

pub struct TabBar {
    pub tabs: Vec<TabLabel>,
    pub active: Option<usize>,
}

impl TabBar {
    pub fn new(tabs: Vec<TabLabel>, active: Option<usize>) -> Self {
        Self { tabs, active }
    }

    /// Text of every tab segment, fitted to `width`.
    fn segments(&self, width: u16) -> Vec<String> {
        if self.tabs.is_empty() {
            return Vec::new();
        }
        let separators = self.tabs.len().saturating_sub(1);
        let share = (width as usize).saturating_sub(separators) / self.tabs.len();
        self.tabs
            .iter()
            .map(|tab| fit(&format!(" {} {} ", tab.icon, tab.label), share))
            .collect()
    }

    /// Index of the tab drawn at `column` (absolute) inside `area`.
    pub fn hit_test(&self, area: Rect, column: u16) -> Option<usize> {
        if column < area.x {
            return None;
        }
        let mut offset = (column - area.x) as usize;
        for (index, segment) in self.segments(area.width).iter().enumerate() {
            let width = segment.width();
            if offset < width {
                return Some(index);
            }
            offset = offset.checked_sub(width + SEPARATOR.width())?;
        }
        None
    }
}

/// Cuts `text` to at most `max` display columns, marking the cut with `…`.
fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator_style = Style::default().fg(Color::DarkGray);
        let mut spans = Vec::new();
        for (index, segment) in self.segments(area.width).into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, separator_style));
            }
            let style = if self.active == Some(index) {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(segment, style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
