use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a rectangle of the frame.
///
/// Props come in as struct fields. Anything that must outlive a frame
/// (list offsets, scroll position) is borrowed from `TuiState`, which is why
/// `render` takes `&mut self`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns raw key events into its own higher-level events.
pub trait EventHandler {
    type Event;

    /// `None` when the key was ignored or only moved internal state.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
