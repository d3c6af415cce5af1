use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::{action::Action, config::Config, tui::Event, tui::Frame};

pub mod attractions;
pub mod booking;
pub mod contact_bar;
pub mod details;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod pricing;

/// A visual and interactive element of the interface. Every section of the
/// site implements this trait; the app loop owns the component list and
/// fans events, actions and draw calls out to it.
pub trait Component {
    /// Register an action handler that can send actions for processing if necessary.
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    /// Register a configuration handler that provides configuration settings if necessary.
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let _ = config;
        Ok(())
    }

    /// Initialize the component with a specified area if necessary.
    fn init(&mut self, area: Rect) -> Result<()> {
        let _ = area;
        Ok(())
    }

    /// Handle incoming events and produce actions if necessary.
    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        let r = match event {
            Some(Event::Key(key_event)) => self.handle_key_events(key_event)?,
            Some(Event::Mouse(mouse_event)) => self.handle_mouse_events(mouse_event)?,
            _ => None,
        };
        Ok(r)
    }

    /// Handle key events and produce actions if necessary.
    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle mouse events and produce actions if necessary.
    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update the state of the component based on a received action.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component on the screen.
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}

/// Advance a cursor over `len` items, wrapping past the end.
pub(crate) fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Move a cursor back over `len` items, wrapping before the start.
pub(crate) fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + len - 1) % len
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_next_wraps_at_end() {
        assert_eq!(wrap_next(0, 3), 1);
        assert_eq!(wrap_next(2, 3), 0);
    }

    #[test]
    fn test_wrap_prev_wraps_at_start() {
        assert_eq!(wrap_prev(1, 3), 0);
        assert_eq!(wrap_prev(0, 3), 2);
    }

    #[test]
    fn test_wrap_handles_empty() {
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_prev(0, 0), 0);
    }
}
