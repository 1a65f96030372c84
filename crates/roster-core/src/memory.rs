//! [`MemoryStore`] — an in-process [`PersonStore`] over a sorted map.

use std::{collections::BTreeMap, sync::Arc};

use parking_lot::Mutex;

use crate::{
  error::{Error, Result},
  person::{NewPerson, Person, PersonId},
  store::PersonStore,
};

/// A person store held entirely in memory.
///
/// Cloning is cheap and clones share the same records. Iteration order is
/// ascending id.
#[derive(Clone, Default)]
pub struct MemoryStore {
  people: Arc<Mutex<BTreeMap<PersonId, Person>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Build a store pre-populated with `people`.
  pub fn with_people(people: impl IntoIterator<Item = Person>) -> Self {
    let map = people.into_iter().map(|p| (p.id, p)).collect();
    Self {
      people: Arc::new(Mutex::new(map)),
    }
  }
}

impl PersonStore for MemoryStore {
  type Error = Error;

  async fn save(&self, person: NewPerson) -> Result<Person> {
    let mut people = self.people.lock();
    let id = match person.id {
      Some(id) => id,
      None => match people.last_key_value() {
        None => 1,
        Some((max, _)) => max.checked_add(1).ok_or(Error::IdsExhausted)?,
      },
    };
    let stored = Person {
      id,
      first_name: person.first_name,
      last_name: person.last_name,
    };
    people.insert(id, stored.clone());
    Ok(stored)
  }

  async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>> {
    Ok(self.people.lock().get(&id).cloned())
  }

  async fn find_all(&self) -> Result<Vec<Person>> {
    Ok(self.people.lock().values().cloned().collect())
  }

  async fn delete(&self, id: PersonId) -> Result<()> {
    self.people.lock().remove(&id);
    Ok(())
  }
}
