pub mod components;
pub mod renderfns;
pub mod shortcuts;
pub mod views;

use crate::app::App;
use ratatui::prelude::*;
use ratatui::widgets::ListState;
use renderfns::{draw_footer, draw_header};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // Header
      Constraint::Min(1),    // Main content
      Constraint::Length(1), // Footer
    ])
    .split(frame.area());

  let hints = shortcuts::ordered(app.shortcuts());
  draw_header(frame, chunks[0], app.api_url(), app.title(), &hints);

  app.view_mut().render(frame, chunks[1]);
  app.command().render_overlay(frame, chunks[1]);

  let view = app.view();
  draw_footer(
    frame,
    chunks[2],
    view.editing().map(|e| e.name.as_str()),
    view.employee_count(),
  );
}

/// Keep a list selection inside the list bounds
pub fn ensure_valid_selection(state: &mut ListState, len: usize) {
  if len == 0 {
    state.select(None);
    return;
  }
  match state.selected() {
    Some(i) if i >= len => state.select(Some(len - 1)),
    None => state.select(Some(0)),
    _ => {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_selection_cleared_for_empty_list() {
    let mut state = ListState::default().with_selected(Some(3));
    ensure_valid_selection(&mut state, 0);
    assert_eq!(state.selected(), None);
  }

  #[test]
  fn test_selection_clamped_to_last() {
    let mut state = ListState::default().with_selected(Some(5));
    ensure_valid_selection(&mut state, 3);
    assert_eq!(state.selected(), Some(2));
  }

  #[test]
  fn test_selection_defaults_to_first() {
    let mut state = ListState::default();
    ensure_valid_selection(&mut state, 2);
    assert_eq!(state.selected(), Some(0));
  }

  #[test]
  fn test_valid_selection_kept() {
    let mut state = ListState::default().with_selected(Some(1));
    ensure_valid_selection(&mut state, 2);
    assert_eq!(state.selected(), Some(1));
  }
}
