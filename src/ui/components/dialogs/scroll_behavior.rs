//! Scroll position of the read-only dialogs (help, logs, messages).

use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

const PAGE_LINES: isize = 10;

/// Offset of the first visible line plus the scrollbar that mirrors it.
/// The offset may run past the end; rendering clamps it to the content.
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
        self.state = self.state.position(self.offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.state = self.state.position(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = usize::MAX;
        self.state = self.state.position(usize::MAX);
    }

    /// Apply a scroll key. Returns false when `code` does not scroll.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-PAGE_LINES),
            KeyCode::PageDown => self.scroll_by(PAGE_LINES),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keys() {
        let mut scroll = DialogScroll::default();
        assert!(scroll.handle_key(KeyCode::Down));
        assert!(scroll.handle_key(KeyCode::PageDown));
        assert_eq!(scroll.offset, 11);

        assert!(scroll.handle_key(KeyCode::PageUp));
        assert!(scroll.handle_key(KeyCode::Up));
        assert!(scroll.handle_key(KeyCode::Up));
        assert_eq!(scroll.offset, 0);

        assert!(!scroll.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn test_scroll_to_bottom_and_reset() {
        let mut scroll = DialogScroll::default();
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset, usize::MAX);

        scroll.reset();
        assert_eq!(scroll.offset, 0);
    }
}
