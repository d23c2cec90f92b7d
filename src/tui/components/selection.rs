//! Cursor over a list whose length is only known at render time.

use ratatui::widgets::ListState;

use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct Selection {
    pub selected: usize,
    pub list_state: ListState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move on Up/Down. Returns true when the event was consumed.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> bool {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            TuiEvent::CursorDown => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            _ => return false,
        }
        self.sync(len);
        true
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub fn sync(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
    }

    pub fn get<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.selected)
    }
}
