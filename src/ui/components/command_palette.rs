use super::input::{InputResult, TextInput};
use super::KeyResult;
use crate::commands::Command;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
  Run(Command),
  /// Enter on text that names no command
  Unknown(String),
  Closed,
}

/// One-line `:` prompt with the matching command names listed below it
#[derive(Debug, Clone, Default)]
pub struct CommandPalette {
  input: TextInput,
  open: bool,
}

impl CommandPalette {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_open(&self) -> bool {
    self.open
  }

  pub fn open(&mut self) {
    self.open = true;
    self.input.clear();
  }

  fn close(&mut self) {
    self.open = false;
    self.input.clear();
  }

  /// `:` opens the palette; while open it takes every key
  pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult<PaletteEvent> {
    if !self.open {
      if key.code == KeyCode::Char(':') {
        self.open();
        return KeyResult::Handled;
      }
      return KeyResult::NotHandled;
    }

    if key.code == KeyCode::Tab {
      if let Some(cmd) = Command::completions(self.input.value()).first() {
        self.input.set_value(cmd.name());
      }
      return KeyResult::Handled;
    }

    match self.input.handle_key(key) {
      InputResult::Submitted(text) => {
        self.close();
        let event = match Command::parse(&text) {
          Some(cmd) => PaletteEvent::Run(cmd),
          None => PaletteEvent::Unknown(text.trim().to_string()),
        };
        KeyResult::Event(event)
      }
      InputResult::Cancelled => {
        self.close();
        KeyResult::Event(PaletteEvent::Closed)
      }
      InputResult::Consumed | InputResult::NotHandled => KeyResult::Handled,
    }
  }

  /// Draw over the top-left corner of `area` when open
  pub fn render_overlay(&self, frame: &mut Frame, area: Rect) {
    if !self.open {
      return;
    }

    let matches = Command::completions(self.input.value());
    let width = 44.min(area.width);
    let height = (3 + matches.len() as u16).min(area.height);
    let popup = Rect::new(area.x + 1, area.y + 1, width, height).intersection(area);

    let mut lines = vec![Line::from(vec![
      Span::styled(":", Style::default().fg(Color::Yellow)),
      Span::raw(self.input.value()),
      Span::styled("_", Style::default().fg(Color::Yellow)),
    ])];
    lines.extend(matches.iter().map(|cmd| {
      Line::from(vec![
        Span::styled(format!("{:<8}", cmd.name()), Style::default().fg(Color::Cyan)),
        Span::styled(cmd.description(), Style::default().fg(Color::DarkGray)),
      ])
    }));

    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::Yellow))
      .title(" Command ");

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
  }
}
