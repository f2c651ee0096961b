use crate::api::{Employee, EmployeeDraft};

/// Local copy of the employee list plus the record being edited.
///
/// Only eventually consistent with the server: nothing here is revalidated
/// except through a full reload or the fetch that starts an edit.
#[derive(Debug, Default)]
pub struct RegistryState {
  employees: Vec<Employee>,
  editing: Option<Employee>,
}

impl RegistryState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn employees(&self) -> &[Employee] {
    &self.employees
  }

  pub fn editing(&self) -> Option<&Employee> {
    self.editing.as_ref()
  }

  pub fn is_editing(&self) -> bool {
    self.editing.is_some()
  }

  /// Replace the whole list
  pub fn replace_all(&mut self, employees: Vec<Employee>) {
    self.employees = employees;
  }

  pub fn append(&mut self, employee: Employee) {
    self.employees.push(employee);
  }

  /// Copy the draft onto every record with this id
  pub fn apply_update(&mut self, id: &str, draft: &EmployeeDraft) {
    self
      .employees
      .iter_mut()
      .filter(|employee| employee.id == id)
      .for_each(|employee| employee.apply(draft));
  }

  pub fn remove(&mut self, id: &str) {
    self.employees.retain(|employee| employee.id != id);
  }

  pub fn begin_edit(&mut self, employee: Employee) {
    self.editing = Some(employee);
  }

  pub fn end_edit(&mut self) {
    self.editing = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn employee(id: &str, name: &str) -> Employee {
    Employee {
      id: id.to_string(),
      name: name.to_string(),
      email: format!("{}@example.com", name.to_lowercase()),
      phone: "555".to_string(),
      salary: "1000".to_string(),
      created_at: "2024-01-01T00:00:00Z".to_string(),
    }
  }

  #[test]
  fn test_replace_all() {
    let mut state = RegistryState::new();
    state.append(employee("0", "Stale"));

    state.replace_all(vec![employee("1", "Ana"), employee("2", "Bruno")]);

    let ids: Vec<&str> = state.employees().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
  }

  #[test]
  fn test_append_keeps_order() {
    let mut state = RegistryState::new();
    state.append(employee("1", "Ana"));
    state.append(employee("2", "Bruno"));

    assert_eq!(state.employees()[1].name, "Bruno");
  }

  #[test]
  fn test_apply_update_touches_only_matching_record() {
    let mut state = RegistryState::new();
    state.replace_all(vec![employee("1", "Ana"), employee("2", "Bruno")]);

    let draft = EmployeeDraft {
      name: "Bruna".to_string(),
      email: "bruna@example.com".to_string(),
      phone: "777".to_string(),
      salary: "2000".to_string(),
    };
    state.apply_update("2", &draft);

    assert_eq!(state.employees()[0], employee("1", "Ana"));
    let updated = &state.employees()[1];
    assert_eq!(updated.id, "2");
    assert_eq!(updated.created_at, "2024-01-01T00:00:00Z");
    assert_eq!(updated.draft(), draft);
  }

  #[test]
  fn test_apply_update_unknown_id_is_noop() {
    let mut state = RegistryState::new();
    state.replace_all(vec![employee("1", "Ana")]);

    state.apply_update("404", &EmployeeDraft::default());

    assert_eq!(state.employees(), &[employee("1", "Ana")]);
  }

  #[test]
  fn test_remove() {
    let mut state = RegistryState::new();
    state.replace_all(vec![
      employee("1", "Ana"),
      employee("2", "Bruno"),
      employee("3", "Carla"),
    ]);

    state.remove("2");

    let ids: Vec<&str> = state.employees().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
  }

  #[test]
  fn test_editing_flag() {
    let mut state = RegistryState::new();
    assert!(!state.is_editing());

    state.begin_edit(employee("1", "Ana"));
    assert!(state.is_editing());
    assert_eq!(state.editing().map(|e| e.id.as_str()), Some("1"));

    state.end_edit();
    assert!(state.editing().is_none());
  }
}
