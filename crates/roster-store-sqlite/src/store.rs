//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use roster_core::{NewPerson, Person, PersonId, PersonStore};
use rusqlite::OptionalExtension as _;

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn row_to_person(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:         row.get(0)?,
    first_name: row.get(1)?,
    last_name:  row.get(2)?,
  })
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn save(&self, person: NewPerson) -> Result<Person> {
    let NewPerson {
      id,
      first_name,
      last_name,
    } = person;

    let stored = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        // Assign max(id) + 1 ourselves: past i64::MAX SQLite would fall back
        // to a random unused rowid.
        let id = match id {
          Some(id) => id,
          None => {
            let max: Option<PersonId> =
              tx.query_row("SELECT MAX(id) FROM people", [], |r| r.get(0))?;
            match max {
              None => 1,
              Some(max) => match max.checked_add(1) {
                Some(next) => next,
                None => return Ok(None),
              },
            }
          }
        };

        tx.execute(
          "INSERT INTO people (id, first_name, last_name) VALUES (?1, ?2, ?3)
           ON CONFLICT(id) DO UPDATE SET
             first_name = excluded.first_name,
             last_name  = excluded.last_name",
          rusqlite::params![id, first_name, last_name],
        )?;
        tx.commit()?;

        Ok(Some(Person {
          id,
          first_name,
          last_name,
        }))
      })
      .await?;
    stored.ok_or(Error::IdsExhausted)
  }

  async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>> {
    let person = self
      .conn
      .call(move |conn| {
        let person = conn
          .query_row(
            "SELECT id, first_name, last_name FROM people WHERE id = ?1",
            rusqlite::params![id],
            row_to_person,
          )
          .optional()?;
        Ok(person)
      })
      .await?;
    Ok(person)
  }

  async fn find_all(&self) -> Result<Vec<Person>> {
    let people = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, first_name, last_name FROM people ORDER BY id")?;
        let rows = stmt
          .query_map([], row_to_person)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(people)
  }

  async fn delete(&self, id: PersonId) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM people WHERE id = ?1", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
