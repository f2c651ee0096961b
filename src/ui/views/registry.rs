use crate::api::Employee;
use crate::commands::Command;
use crate::event::ApiEvent;
use crate::registry::{Controller, FormAction};
use crate::ui::components::{EmployeeForm, FormEvent, KeyResult};
use crate::ui::ensure_valid_selection;
use crate::ui::renderfns::{format_timestamp, truncate};
use crate::ui::shortcuts::Shortcut;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use tracing::debug;

/// Actions the view asks the App to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
  None,
  Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
  Form,
  List,
}

/// The single registry screen: employee form on top, employee list below
pub struct RegistryView {
  controller: Controller,
  form: EmployeeForm,
  list_state: ListState,
  focus: Focus,
}

impl RegistryView {
  pub fn new(controller: Controller) -> Self {
    Self {
      controller,
      form: EmployeeForm::new(),
      list_state: ListState::default(),
      focus: Focus::List,
    }
  }

  /// Initial load, also bound to reload
  pub fn load(&mut self) {
    self.controller.load_all();
  }

  pub fn editing(&self) -> Option<&Employee> {
    self.controller.editing()
  }

  pub fn employee_count(&self) -> usize {
    self.controller.employees().len()
  }

  /// Keys go to a text field, so single-letter shortcuts are off
  pub fn is_capturing_text(&self) -> bool {
    self.focus == Focus::Form
  }

  /// Apply a request result to the list and the form
  pub fn apply(&mut self, event: ApiEvent) {
    match self.controller.apply(event) {
      FormAction::None => {}
      FormAction::Clear => self.form.clear(),
      FormAction::Fill(draft) => {
        self.form.fill(&draft);
        self.focus = Focus::Form;
      }
    }
  }

  /// Run a command from the palette
  pub fn run_command(&mut self, command: Command) -> ViewAction {
    match command {
      Command::Reload => self.load(),
      Command::New => self.start_new(),
      Command::Quit => return ViewAction::Quit,
    }
    ViewAction::None
  }

  fn start_new(&mut self) {
    if let FormAction::Clear = self.controller.cancel_edit() {
      self.form.clear();
    }
    self.focus = Focus::Form;
  }

  fn selected_employee(&mut self) -> Option<&Employee> {
    let employees = self.controller.employees();
    ensure_valid_selection(&mut self.list_state, employees.len());
    self.list_state.selected().and_then(|i| employees.get(i))
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> ViewAction {
    match self.focus {
      Focus::Form => self.handle_form_key(key),
      Focus::List => self.handle_list_key(key),
    }
  }

  fn handle_form_key(&mut self, key: KeyEvent) -> ViewAction {
    match self.form.handle_key(key) {
      KeyResult::Event(FormEvent::Submitted(draft)) => {
        if !self.controller.submit(draft) {
          debug!("Submit ignored, form has empty fields");
        }
      }
      KeyResult::Event(FormEvent::Left) => self.focus = Focus::List,
      KeyResult::Handled | KeyResult::NotHandled => {}
    }
    ViewAction::None
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> ViewAction {
    ensure_valid_selection(&mut self.list_state, self.controller.employees().len());

    match key.code {
      KeyCode::Char('j') | KeyCode::Down => self.list_state.select_next(),
      KeyCode::Char('k') | KeyCode::Up => self.list_state.select_previous(),
      KeyCode::Char('g') | KeyCode::Home => self.list_state.select_first(),
      KeyCode::Char('G') | KeyCode::End => self.list_state.select_last(),
      KeyCode::Char('r') => self.load(),
      KeyCode::Char('n') => self.start_new(),
      KeyCode::Char('i') | KeyCode::Tab => self.focus = Focus::Form,
      KeyCode::Char('e') | KeyCode::Enter => {
        if let Some(id) = self.selected_employee().map(|e| e.id.clone()) {
          self.controller.begin_edit(&id);
        }
      }
      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(id) = self.selected_employee().map(|e| e.id.clone()) {
          self.controller.delete(&id);
        }
      }
      KeyCode::Char('q') => return ViewAction::Quit,
      _ => {}
    }
    ViewAction::None
  }

  pub fn shortcuts(&self) -> Vec<Shortcut> {
    let mut shortcuts = vec![Shortcut::new(":", "command").with_priority(10)];
    match self.focus {
      Focus::Form => {
        shortcuts.push(Shortcut::new("tab", "next field").with_priority(20));
        shortcuts.push(Shortcut::new("enter", "submit").with_priority(30));
        shortcuts.push(Shortcut::new("esc", "list").with_priority(40));
      }
      Focus::List => {
        shortcuts.push(Shortcut::new("e", "edit").with_priority(20));
        shortcuts.push(Shortcut::new("d", "delete").with_priority(30));
        shortcuts.push(Shortcut::new("n", "new").with_priority(40));
        shortcuts.push(Shortcut::new("r", "reload").with_priority(50));
        shortcuts.push(Shortcut::new("q", "quit").with_priority(60));
      }
    }
    shortcuts
  }

  pub fn render(&mut self, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Length(EmployeeForm::HEIGHT),
        Constraint::Min(3),
      ])
      .split(area);

    self.form.render(
      frame,
      chunks[0],
      self.controller.editing(),
      self.focus == Focus::Form,
    );
    self.render_list(frame, chunks[1]);
  }

  fn render_list(&mut self, frame: &mut Frame, area: Rect) {
    let employees = self.controller.employees();
    ensure_valid_selection(&mut self.list_state, employees.len());

    let title = if self.controller.is_loading() {
      " Employees (loading...) ".to_string()
    } else if self.controller.in_flight() > 0 {
      format!(" Employees ({}) (working...) ", employees.len())
    } else {
      format!(" Employees ({}) ", employees.len())
    };
    let border = if self.focus == Focus::List {
      Color::Yellow
    } else {
      Color::Blue
    };

    let block = Block::default()
      .title(title)
      .title_alignment(Alignment::Center)
      .borders(Borders::ALL)
      .border_style(Style::default().fg(border));

    if employees.is_empty() {
      let content = if self.controller.is_loading() {
        "Loading employees..."
      } else {
        "No employees registered. Press 'n' to add one."
      };
      let paragraph = Paragraph::new(content)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));
      frame.render_widget(paragraph, area);
      return;
    }

    let items: Vec<ListItem> = employees.iter().map(employee_item).collect();

    let list = List::new(items)
      .block(block)
      .highlight_style(
        Style::default()
          .bg(Color::DarkGray)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut self.list_state);
  }
}

fn employee_item(employee: &Employee) -> ListItem<'static> {
  let line = Line::from(vec![
    Span::styled(
      format!("{:<24}", truncate(&employee.name, 24)),
      Style::default().fg(Color::Cyan),
    ),
    Span::raw(" "),
    Span::raw(format!("{:<30}", truncate(&employee.email, 30))),
    Span::raw(" "),
    Span::raw(format!("{:<16}", truncate(&employee.phone, 16))),
    Span::raw(" "),
    Span::styled(
      format!("{:>12}", truncate(&employee.salary, 12)),
      Style::default().fg(Color::Green),
    ),
    Span::raw("  "),
    Span::styled(
      format_timestamp(&employee.created_at),
      Style::default().fg(Color::DarkGray),
    ),
  ]);
  ListItem::new(line)
}
