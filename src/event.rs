use crate::api::{Employee, EmployeeDraft};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events
#[derive(Debug)]
pub enum Event {
  /// Terminal key press
  Key(KeyEvent),
  /// Periodic tick for UI refresh
  Tick,
  /// Outcome of a background API request
  Api(ApiEvent),
}

/// The operation a request task was performing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Load,
  Submit,
  Delete,
  Fetch,
}

impl Operation {
  /// Message written to the log when the operation fails
  pub fn failure_message(self) -> &'static str {
    match self {
      Operation::Load => "Error loading employees",
      Operation::Submit => "Error submitting employee data",
      Operation::Delete => "Error deleting employee",
      Operation::Fetch => "Error fetching employee data",
    }
  }
}

/// Results sent back from request tasks to the event loop
#[derive(Debug)]
pub enum ApiEvent {
  /// Full list from the server
  Loaded(Vec<Employee>),
  /// Record created by the server
  Created(Employee),
  /// Update accepted for this id with these fields
  Updated { id: String, draft: EmployeeDraft },
  /// Delete accepted for this id
  Deleted(String),
  /// Fresh copy of a record to edit
  Fetched(Employee),
  /// The operation failed; the error is already logged
  Failed(Operation),
}

/// Event handler that produces events from terminal input and a tick timer
pub struct EventHandler {
  tx: mpsc::UnboundedSender<Event>,
  rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
  pub fn new() -> Self {
    let (tx, rx) = mpsc::unbounded_channel();
    Self { tx, rx }
  }

  /// Start reading the terminal; call once raw mode is on
  pub fn start(&self, tick_rate: Duration) {
    // Terminal reads block, keep them off the async workers
    let input_tx = self.tx.clone();
    tokio::task::spawn_blocking(move || loop {
      if event::poll(tick_rate).unwrap_or(false) {
        if let Ok(CrosstermEvent::Key(key)) = event::read() {
          // Windows reports releases too
          if key.kind == KeyEventKind::Press && input_tx.send(Event::Key(key)).is_err() {
            break;
          }
        }
      } else if input_tx.send(Event::Tick).is_err() {
        break;
      }
    });
  }

  /// Sender for background tasks to report back on
  pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
    self.tx.clone()
  }

  /// Receive the next event
  pub async fn next(&mut self) -> Option<Event> {
    self.rx.recv().await
  }
}
