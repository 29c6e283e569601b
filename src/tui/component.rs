use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields) built fresh from
/// the navigation controller each frame, and render into a `Frame` within a
/// given `Rect`.
///
/// `render` takes `&mut self` to match ratatui's `StatefulWidget` shape,
/// even though the current components keep no state between frames.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
