use crate::api::EmployeeClient;
use crate::config::Config;
use crate::event::{Event, EventHandler};
use crate::registry::Controller;
use crate::ui;
use crate::ui::components::{CommandPalette, KeyResult, PaletteEvent};
use crate::ui::shortcuts::Shortcut;
use crate::ui::views::{RegistryView, ViewAction};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
  disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tracing::{info, warn};

/// Main application state
pub struct App {
  /// The registry screen
  view: RegistryView,

  /// Command palette (after pressing :)
  command: CommandPalette,

  /// Terminal and API events
  events: EventHandler,

  /// Application configuration
  config: Config,

  /// Whether to quit
  should_quit: bool,
}

impl App {
  pub fn new(config: Config) -> Result<Self> {
    let client = EmployeeClient::new(&config)?;
    let events = EventHandler::new();
    let controller = Controller::new(client, events.sender());

    Ok(Self {
      view: RegistryView::new(controller),
      command: CommandPalette::new(),
      events,
      config,
      should_quit: false,
    })
  }

  pub async fn run(&mut self) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    self.events.start(Duration::from_millis(250));

    let result = self.event_loop().await;

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
  }

  async fn event_loop(&mut self) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    info!(url = %self.config.api.url, "Starting");
    self.view.load();

    while !self.should_quit {
      terminal.draw(|frame| ui::draw(frame, self))?;

      match self.events.next().await {
        Some(event) => self.handle_event(event),
        None => break,
      }
    }

    Ok(())
  }

  fn handle_event(&mut self, event: Event) {
    match event {
      Event::Key(key) => self.handle_key(key),
      Event::Tick => {} // UI refresh happens automatically
      Event::Api(api_event) => self.view.apply(api_event),
    }
  }

  fn handle_key(&mut self, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
      self.should_quit = true;
      return;
    }

    // ':' is text while a form field has focus
    if self.command.is_open() || !self.view.is_capturing_text() {
      match self.command.handle_key(key) {
        KeyResult::Event(PaletteEvent::Run(command)) => {
          let action = self.view.run_command(command);
          self.handle_view_action(action);
          return;
        }
        KeyResult::Event(PaletteEvent::Unknown(text)) => {
          warn!(command = %text, "Unknown command");
          return;
        }
        KeyResult::Event(PaletteEvent::Closed) | KeyResult::Handled => return,
        KeyResult::NotHandled => {}
      }
    }

    let action = self.view.handle_key(key);
    self.handle_view_action(action);
  }

  fn handle_view_action(&mut self, action: ViewAction) {
    match action {
      ViewAction::None => {}
      ViewAction::Quit => self.should_quit = true,
    }
  }

  // Accessors for UI rendering
  pub fn view(&self) -> &RegistryView {
    &self.view
  }

  pub fn view_mut(&mut self) -> &mut RegistryView {
    &mut self.view
  }

  pub fn command(&self) -> &CommandPalette {
    &self.command
  }

  pub fn api_url(&self) -> &str {
    &self.config.api.url
  }

  pub fn title(&self) -> &str {
    self.config.title()
  }

  pub fn shortcuts(&self) -> Vec<Shortcut> {
    self.view.shortcuts()
  }
}
