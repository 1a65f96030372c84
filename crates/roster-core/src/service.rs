//! [`PersonService`] — the five CRUD operations over a [`PersonStore`].
//!
//! Each operation is a single pass: look up, write, return. Nothing is locked
//! across store calls, so two concurrent requests on the same id are ordered
//! only by the store.

use std::sync::Arc;

use crate::{
  error::{Error, Result},
  person::{NewPerson, Person, PersonId},
  store::PersonStore,
};

/// Outcome of [`PersonService::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
  /// No record had the id; the input was stored as a new record.
  Created(Person),
  /// The existing record had its names replaced.
  Updated(Person),
}

/// Request handler logic, generic over the store it delegates to.
pub struct PersonService<S> {
  store: Arc<S>,
}

impl<S> Clone for PersonService<S> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
    }
  }
}

impl<S: PersonStore> PersonService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Store `person` unconditionally. An existing record with the same id is
  /// overwritten; no uniqueness check happens here.
  pub async fn create(&self, person: NewPerson) -> Result<Person> {
    self.store.save(person).await.map_err(Error::store)
  }

  pub async fn get_by_id(&self, id: PersonId) -> Result<Person> {
    self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::PersonNotFound(id))
  }

  pub async fn get_all(&self) -> Result<Vec<Person>> {
    self.store.find_all().await.map_err(Error::store)
  }

  /// Update the names of the record with `person.id`, or create it when no
  /// such record exists.
  pub async fn upsert(&self, person: Person) -> Result<Upsert> {
    let existing = self
      .store
      .find_by_id(person.id)
      .await
      .map_err(Error::store)?;

    match existing {
      None => self.create(person.into()).await.map(Upsert::Created),
      Some(mut stored) => {
        stored.merge_names(&person);
        let saved = self.store.save(stored.into()).await.map_err(Error::store)?;
        Ok(Upsert::Updated(saved))
      }
    }
  }

  /// Remove the record with `id`. Fails with `PersonNotFound` when there
  /// is nothing to remove.
  pub async fn delete(&self, id: PersonId) -> Result<()> {
    self.get_by_id(id).await?;
    self.store.delete(id).await.map_err(Error::store)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use parking_lot::Mutex;

  use super::*;
  use crate::memory::MemoryStore;

  /// Wraps a [`MemoryStore`] and records every call made against it.
  #[derive(Default)]
  struct RecordingStore {
    inner: MemoryStore,
    calls: Mutex<Vec<String>>,
  }

  impl RecordingStore {
    fn seeded(people: impl IntoIterator<Item = Person>) -> Self {
      Self {
        inner: MemoryStore::with_people(people),
        calls: Mutex::default(),
      }
    }

    fn record(&self, call: String) { self.calls.lock().push(call); }

    fn calls(&self) -> Vec<String> { self.calls.lock().clone() }
  }

  impl PersonStore for RecordingStore {
    type Error = Error;

    async fn save(&self, person: NewPerson) -> Result<Person> {
      self.record(format!("save {:?}", person.id));
      self.inner.save(person).await
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>> {
      self.record(format!("find_by_id {id}"));
      self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Person>> {
      self.record("find_all".into());
      self.inner.find_all().await
    }

    async fn delete(&self, id: PersonId) -> Result<()> {
      self.record(format!("delete {id}"));
      self.inner.delete(id).await
    }
  }

  fn service(people: Vec<Person>) -> (PersonService<RecordingStore>, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::seeded(people));
    (PersonService::new(Arc::clone(&store)), store)
  }

  #[tokio::test]
  async fn get_all_on_empty_store_is_empty() {
    let (svc, store) = service(vec![]);
    assert!(svc.get_all().await.unwrap().is_empty());
    assert_eq!(store.calls(), ["find_all"]);
  }

  #[tokio::test]
  async fn create_then_get_returns_same_record() {
    let (svc, _) = service(vec![]);
    let created = svc
      .create(Person::new(1, "Connor", "Jones").into())
      .await
      .unwrap();
    assert_eq!(created, Person::new(1, "Connor", "Jones"));
    assert_eq!(svc.get_by_id(1).await.unwrap(), created);
  }

  #[tokio::test]
  async fn create_does_not_check_for_duplicates() {
    let (svc, store) = service(vec![Person::new(5, "Old", "Entry")]);
    svc
      .create(Person::new(5, "Connor", "Jones").into())
      .await
      .unwrap();
    assert_eq!(store.calls(), ["save Some(5)"]);
    assert_eq!(svc.get_by_id(5).await.unwrap().first_name, "Connor");
  }

  #[tokio::test]
  async fn get_missing_is_not_found() {
    let (svc, store) = service(vec![]);
    let err = svc.get_by_id(99).await.unwrap_err();
    assert!(matches!(err, Error::PersonNotFound(99)));
    assert_eq!(store.calls(), ["find_by_id 99"]);
  }

  #[tokio::test]
  async fn upsert_missing_creates() {
    let (svc, store) = service(vec![]);
    let out = svc.upsert(Person::new(0, "Not", "Found")).await.unwrap();
    assert_eq!(out, Upsert::Created(Person::new(0, "Not", "Found")));
    assert_eq!(store.calls(), ["find_by_id 0", "save Some(0)"]);
  }

  #[tokio::test]
  async fn upsert_existing_replaces_names_only() {
    let (svc, store) = service(vec![Person::new(29, "Connor", "Jones")]);
    let out = svc.upsert(Person::new(29, "New", "Name")).await.unwrap();
    assert_eq!(out, Upsert::Updated(Person::new(29, "New", "Name")));
    assert_eq!(store.calls(), ["find_by_id 29", "save Some(29)"]);
    assert_eq!(svc.get_by_id(29).await.unwrap(), Person::new(29, "New", "Name"));
  }

  #[tokio::test]
  async fn delete_existing_then_get_is_not_found() {
    let (svc, store) = service(vec![Person::new(29, "Connor", "Jones")]);
    svc.delete(29).await.unwrap();
    assert_eq!(store.calls(), ["find_by_id 29", "delete 29"]);
    assert!(matches!(
      svc.get_by_id(29).await,
      Err(Error::PersonNotFound(29))
    ));
  }

  #[tokio::test]
  async fn delete_missing_never_touches_store() {
    let (svc, store) = service(vec![]);
    assert!(matches!(svc.delete(0).await, Err(Error::PersonNotFound(0))));
    assert_eq!(store.calls(), ["find_by_id 0"]);
  }
}
