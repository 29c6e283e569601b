use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Navigation gestures (become core actions)
    Back,
    Push,
    NextTab,
    PrevTab,
    SelectTab(usize), // 0-based, from the digit keys
    ToggleTabs,
    SendResult,
    Quit,
    ForceQuit, // Ctrl+C

    // TUI-local events
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Esc) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
                (_, KeyCode::Enter) => Some(TuiEvent::Push),
                (_, KeyCode::Tab) | (_, KeyCode::Right) => Some(TuiEvent::NextTab),
                (_, KeyCode::BackTab) | (_, KeyCode::Left) => Some(TuiEvent::PrevTab),
                (_, KeyCode::Char(c @ '1'..='9')) => {
                    Some(TuiEvent::SelectTab(c as usize - '1' as usize))
                }
                (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleTabs),
                (_, KeyCode::Char('r')) => Some(TuiEvent::SendResult),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
