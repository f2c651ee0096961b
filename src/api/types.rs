//! Wire and domain types for the employee resource.
//!
//! The API owns the records; these are transient client-side copies.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An employee record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employee {
  #[serde(deserialize_with = "string_or_number")]
  pub id: String,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub email: String,
  #[serde(default, deserialize_with = "string_or_number")]
  pub phone: String,
  #[serde(default, deserialize_with = "string_or_number")]
  pub salary: String,
  /// Server-assigned creation timestamp, kept verbatim
  #[serde(default, alias = "createdAt")]
  pub created_at: String,
}

impl Employee {
  /// The user-editable part of this record
  pub fn draft(&self) -> EmployeeDraft {
    EmployeeDraft {
      name: self.name.clone(),
      email: self.email.clone(),
      phone: self.phone.clone(),
      salary: self.salary.clone(),
    }
  }

  /// Overwrite the editable fields, leaving id and timestamp alone
  pub fn apply(&mut self, draft: &EmployeeDraft) {
    self.name = draft.name.clone();
    self.email = draft.email.clone();
    self.phone = draft.phone.clone();
    self.salary = draft.salary.clone();
  }
}

/// Request body for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeDraft {
  pub name: String,
  pub email: String,
  pub phone: String,
  pub salary: String,
}

impl EmployeeDraft {
  /// Every field is present. Nothing else is checked.
  pub fn is_complete(&self) -> bool {
    !self.name.is_empty()
      && !self.email.is_empty()
      && !self.phone.is_empty()
      && !self.salary.is_empty()
  }
}

/// Accept a JSON string or number and keep it as a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(s),
    Value::Number(n) => Ok(n.to_string()),
    Value::Null => Ok(String::new()),
    other => Err(serde::de::Error::custom(format!(
      "expected string or number, got {}",
      other
    ))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn draft(name: &str, email: &str, phone: &str, salary: &str) -> EmployeeDraft {
    EmployeeDraft {
      name: name.to_string(),
      email: email.to_string(),
      phone: phone.to_string(),
      salary: salary.to_string(),
    }
  }

  #[test]
  fn test_deserialize_string_fields() {
    let employee: Employee = serde_json::from_value(json!({
      "id": "a1",
      "name": "Ana",
      "email": "ana@example.com",
      "phone": "555-0100",
      "salary": "4200.50",
      "created_at": "2024-03-01T12:00:00Z"
    }))
    .unwrap();

    assert_eq!(employee.id, "a1");
    assert_eq!(employee.salary, "4200.50");
    assert_eq!(employee.created_at, "2024-03-01T12:00:00Z");
  }

  #[test]
  fn test_deserialize_numeric_fields_and_camel_case_timestamp() {
    let employee: Employee = serde_json::from_value(json!({
      "id": 7,
      "name": "Bruno",
      "email": "bruno@example.com",
      "phone": 5550101,
      "salary": 3100,
      "createdAt": "2024-03-02T08:30:00Z"
    }))
    .unwrap();

    assert_eq!(employee.id, "7");
    assert_eq!(employee.phone, "5550101");
    assert_eq!(employee.salary, "3100");
    assert_eq!(employee.created_at, "2024-03-02T08:30:00Z");
  }

  #[test]
  fn test_missing_id_is_rejected() {
    let result: Result<Employee, _> = serde_json::from_value(json!({ "name": "Nobody" }));
    assert!(result.is_err());
  }

  #[test]
  fn test_draft_serializes_four_fields() {
    let body = serde_json::to_value(draft("Ana", "ana@example.com", "555", "10")).unwrap();
    assert_eq!(
      body,
      json!({ "name": "Ana", "email": "ana@example.com", "phone": "555", "salary": "10" })
    );
  }

  #[test]
  fn test_draft_completeness() {
    assert!(draft("a", "b", "c", "d").is_complete());
    assert!(!draft("", "b", "c", "d").is_complete());
    assert!(!draft("a", "", "c", "d").is_complete());
    assert!(!draft("a", "b", "", "d").is_complete());
    assert!(!draft("a", "b", "c", "").is_complete());
    // Presence only: whitespace counts as a value
    assert!(draft(" ", "b", "c", "d").is_complete());
  }

  #[test]
  fn test_apply_keeps_identity() {
    let mut employee = Employee {
      id: "1".to_string(),
      name: "Old".to_string(),
      email: "old@example.com".to_string(),
      phone: "1".to_string(),
      salary: "1".to_string(),
      created_at: "2024-01-01T00:00:00Z".to_string(),
    };

    employee.apply(&draft("New", "new@example.com", "2", "2"));

    assert_eq!(employee.id, "1");
    assert_eq!(employee.created_at, "2024-01-01T00:00:00Z");
    assert_eq!(employee.draft(), draft("New", "new@example.com", "2", "2"));
  }
}
