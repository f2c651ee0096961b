use super::input::{InputResult, TextInput};
use super::KeyResult;
use crate::api::{Employee, EmployeeDraft};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Events emitted by the form that parent needs to handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
  /// Enter pressed, here's what the fields hold
  Submitted(EmployeeDraft),
  /// Escape pressed, focus should leave the form
  Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
  Name,
  Email,
  Phone,
  Salary,
}

impl Field {
  const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Salary];

  fn label(self) -> &'static str {
    match self {
      Field::Name => "Name",
      Field::Email => "Email",
      Field::Phone => "Phone",
      Field::Salary => "Salary",
    }
  }

  fn placeholder(self) -> &'static str {
    match self {
      Field::Name => "Employee's full name...",
      Field::Email => "Employee's email...",
      Field::Phone => "Employee's phone number...",
      Field::Salary => "Employee's gross salary...",
    }
  }
}

/// Four-field employee form
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
  inputs: [TextInput; 4],
  active: usize,
}

impl EmployeeForm {
  /// Lines needed to render the form, borders included
  pub const HEIGHT: u16 = 8;

  pub fn new() -> Self {
    Self::default()
  }

  /// Current field values
  pub fn draft(&self) -> EmployeeDraft {
    EmployeeDraft {
      name: self.inputs[0].value().to_string(),
      email: self.inputs[1].value().to_string(),
      phone: self.inputs[2].value().to_string(),
      salary: self.inputs[3].value().to_string(),
    }
  }

  /// Pre-fill every field and go back to the first one
  pub fn fill(&mut self, draft: &EmployeeDraft) {
    self.inputs[0].set_value(&draft.name);
    self.inputs[1].set_value(&draft.email);
    self.inputs[2].set_value(&draft.phone);
    self.inputs[3].set_value(&draft.salary);
    self.active = 0;
  }

  pub fn clear(&mut self) {
    self.inputs.iter_mut().for_each(TextInput::clear);
    self.active = 0;
  }

  fn next_field(&mut self) {
    self.active = (self.active + 1) % Field::ALL.len();
  }

  fn previous_field(&mut self) {
    self.active = (self.active + Field::ALL.len() - 1) % Field::ALL.len();
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult<FormEvent> {
    match key.code {
      KeyCode::Tab | KeyCode::Down => {
        self.next_field();
        KeyResult::Handled
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.previous_field();
        KeyResult::Handled
      }
      _ => match self.inputs[self.active].handle_key(key) {
        InputResult::Submitted(_) => KeyResult::Event(FormEvent::Submitted(self.draft())),
        InputResult::Cancelled => KeyResult::Event(FormEvent::Left),
        InputResult::Consumed => KeyResult::Handled,
        InputResult::NotHandled => KeyResult::NotHandled,
      },
    }
  }

  pub fn render(
    &self,
    frame: &mut Frame,
    area: Rect,
    editing: Option<&Employee>,
    focused: bool,
  ) {
    let title = match editing {
      Some(employee) => format!(" Editing {} ", employee.name),
      None => " New employee ".to_string(),
    };
    let border = if focused { Color::Yellow } else { Color::Blue };

    let block = Block::default()
      .title(title)
      .borders(Borders::ALL)
      .border_style(Style::default().fg(border));

    let mut lines: Vec<Line> = Field::ALL
      .iter()
      .zip(self.inputs.iter())
      .enumerate()
      .map(|(i, (field, input))| self.field_line(*field, input, focused && i == self.active))
      .collect();

    let submit_label = if editing.is_some() { "Update" } else { "Create" };
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
      Span::styled(
        format!("[ {} ]", submit_label),
        Style::default().fg(Color::Black).bg(Color::Green).bold(),
      ),
      Span::styled("  Enter to submit", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
  }

  fn field_line<'a>(&self, field: Field, input: &'a TextInput, active: bool) -> Line<'a> {
    let label_style = if active {
      Style::default().fg(Color::Yellow).bold()
    } else {
      Style::default().bold()
    };
    let label = Span::styled(format!("{:<8}", format!("{}:", field.label())), label_style);

    if active {
      let (before, after) = input.split_at_cursor();
      return Line::from(vec![
        label,
        Span::raw(before),
        Span::styled("_", Style::default().fg(Color::Yellow)),
        Span::raw(after),
      ]);
    }

    if input.is_empty() {
      Line::from(vec![
        label,
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray)),
      ])
    } else {
      Line::from(vec![label, Span::raw(input.value())])
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossterm::event::KeyModifiers;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn type_str(form: &mut EmployeeForm, s: &str) {
    for c in s.chars() {
      form.handle_key(key(KeyCode::Char(c)));
    }
  }

  fn filled() -> EmployeeForm {
    let mut form = EmployeeForm::new();
    type_str(&mut form, "Ana");
    form.handle_key(key(KeyCode::Tab));
    type_str(&mut form, "ana@example.com");
    form.handle_key(key(KeyCode::Tab));
    type_str(&mut form, "555-0100");
    form.handle_key(key(KeyCode::Tab));
    type_str(&mut form, "4200");
    form
  }

  #[test]
  fn test_typing_fills_fields_in_order() {
    let form = filled();
    assert_eq!(
      form.draft(),
      EmployeeDraft {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: "555-0100".to_string(),
        salary: "4200".to_string(),
      }
    );
  }

  #[test]
  fn test_enter_submits_current_values() {
    let mut form = filled();
    match form.handle_key(key(KeyCode::Enter)) {
      KeyResult::Event(FormEvent::Submitted(draft)) => assert!(draft.is_complete()),
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn test_enter_with_missing_field_still_reports_draft() {
    let mut form = EmployeeForm::new();
    type_str(&mut form, "Ana");
    match form.handle_key(key(KeyCode::Enter)) {
      KeyResult::Event(FormEvent::Submitted(draft)) => assert!(!draft.is_complete()),
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn test_field_navigation_wraps() {
    let mut form = EmployeeForm::new();
    form.handle_key(key(KeyCode::BackTab));
    type_str(&mut form, "100");
    form.handle_key(key(KeyCode::Down));
    type_str(&mut form, "Ana");

    let draft = form.draft();
    assert_eq!(draft.salary, "100");
    assert_eq!(draft.name, "Ana");
  }

  #[test]
  fn test_escape_leaves_form() {
    let mut form = EmployeeForm::new();
    assert_eq!(
      form.handle_key(key(KeyCode::Esc)),
      KeyResult::Event(FormEvent::Left)
    );
  }

  #[test]
  fn test_fill_and_clear() {
    let mut form = EmployeeForm::new();
    let draft = EmployeeDraft {
      name: "Bruno".to_string(),
      email: "bruno@example.com".to_string(),
      phone: "555".to_string(),
      salary: "3900".to_string(),
    };

    form.fill(&draft);
    assert_eq!(form.draft(), draft);

    form.clear();
    assert_eq!(form.draft(), EmployeeDraft::default());
  }
}
