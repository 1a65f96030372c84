//! Person — the single entity managed by the service.
//!
//! Field names serialise in camelCase (`id`, `firstName`, `lastName`) and must
//! stay that way for wire compatibility.

use serde::{Deserialize, Serialize};

/// Identifier of a stored person. Supplied by the caller or assigned by the
/// store; never generated by the service itself.
pub type PersonId = i64;

/// A stored person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub id:         PersonId,
  pub first_name: String,
  pub last_name:  String,
}

impl Person {
  pub fn new(
    id: PersonId,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
  ) -> Self {
    Self {
      id,
      first_name: first_name.into(),
      last_name: last_name.into(),
    }
  }

  /// Copy the mutable fields of `other` onto `self`. The id is left alone.
  pub fn merge_names(&mut self, other: &Person) {
    self.first_name.clone_from(&other.first_name);
    self.last_name.clone_from(&other.last_name);
  }
}

/// Input for a create: a person whose id may not be known yet.
///
/// When `id` is `None` the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
  #[serde(default)]
  pub id:         Option<PersonId>,
  pub first_name: String,
  pub last_name:  String,
}

impl From<Person> for NewPerson {
  fn from(p: Person) -> Self {
    Self {
      id:         Some(p.id),
      first_name: p.first_name,
      last_name:  p.last_name,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn person_serialises_with_camel_case_fields() {
    let p = Person::new(1, "Connor", "Jones");
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v, json!({ "id": 1, "firstName": "Connor", "lastName": "Jones" }));
  }

  #[test]
  fn new_person_accepts_missing_id() {
    let p: NewPerson =
      serde_json::from_str(r#"{"firstName":"Test","lastName":"Person"}"#).unwrap();
    assert_eq!(p.id, None);
    assert_eq!(p.first_name, "Test");
  }

  #[test]
  fn merge_names_keeps_id() {
    let mut stored = Person::new(29, "Connor", "Jones");
    stored.merge_names(&Person::new(30, "New", "Name"));
    assert_eq!(stored, Person::new(29, "New", "Name"));
  }
}
