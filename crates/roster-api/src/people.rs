//! Handlers for `/people` endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `GET`    | `/people`      | Every stored person |
//! | `POST`   | `/people`      | Body: person, `id` optional; always 201 |
//! | `PUT`    | `/people`      | Body: person with `id`; 200 if it existed, else 201 |
//! | `GET`    | `/people/:id`  | 404 (empty body) if not found |
//! | `DELETE` | `/people/:id`  | 204, or 404 (empty body) if not found |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{NewPerson, Person, PersonId, PersonService, PersonStore, Upsert};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /people`
pub async fn list<S>(
  State(service): State<PersonService<S>>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore + 'static,
{
  Ok(Json(service.get_all().await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /people` — body: `{"firstName":"Connor","lastName":"Jones"}`
pub async fn create<S>(
  State(service): State<PersonService<S>>,
  Json(body): Json<NewPerson>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore + 'static,
{
  let person = service.create(body).await?;
  tracing::debug!(id = person.id, "created person");
  Ok((StatusCode::CREATED, Json(person)))
}

// ─── Upsert ───────────────────────────────────────────────────────────────────

/// `PUT /people` — body: `{"id":29,"firstName":"New","lastName":"Name"}`
pub async fn upsert<S>(
  State(service): State<PersonService<S>>,
  Json(body): Json<Person>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore + 'static,
{
  let (status, person) = match service.upsert(body).await? {
    Upsert::Created(p) => (StatusCode::CREATED, p),
    Upsert::Updated(p) => (StatusCode::OK, p),
  };
  tracing::debug!(id = person.id, %status, "upserted person");
  Ok((status, Json(person)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /people/:id`
pub async fn get_one<S>(
  State(service): State<PersonService<S>>,
  Path(id): Path<PersonId>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore + 'static,
{
  Ok(Json(service.get_by_id(id).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /people/:id`
pub async fn delete_one<S>(
  State(service): State<PersonService<S>>,
  Path(id): Path<PersonId>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore + 'static,
{
  service.delete(id).await?;
  tracing::debug!(id, "deleted person");
  Ok(StatusCode::NO_CONTENT)
}
