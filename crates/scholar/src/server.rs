//! HTTP boundary over the publication catalogue.
//!
//! Routes:
//!
//! - `GET  /users/{user_id}/publications?q=` lists a user's publications, newest first, or searches
//!   them when `q` is given
//! - `POST /users/{user_id}/publications` creates a publication
//! - `GET|PUT|DELETE /publications/{id}` fetches, edits or deletes one publication
//! - `GET  /users/{user_id}/publications/summary?format=&filter=` downloads the grouped summary
//!
//! Failures are answered with a JSON body `{"error": "..."}` and a status
//! derived from the [`ScholarError`] variant. Path and body extraction
//! failures are reported as [`ScholarError::InvalidRequest`].
//!
//! # Examples
//!
//! ```no_run
//! use scholar::{config::Config, database::Database, server};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let database = Database::open(&config.database_path).await?;
//! server::serve(&config, database).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use axum::{
  extract::{
    self,
    rejection::{JsonRejection, PathRejection},
    State,
  },
  http::{header, StatusCode},
  response::{IntoResponse, Response},
  routing::get,
  Json, Router,
};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::trace::TraceLayer;

use super::*;
use crate::{
  database::{Add, DatabaseInstruction, Query, Remove, Update},
  export::generate_summary,
  publication::{NewPublication, PublicationChanges},
};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
  /// The catalogue, behind a lock so writes are serialized
  pub database: Arc<Mutex<Database>>,
}

impl AppState {
  /// Wraps an open database.
  pub fn new(database: Database) -> Self { Self { database: Arc::new(Mutex::new(database)) } }
}

/// A [`ScholarError`] rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ScholarError);

impl ApiError {
  /// Status code answered for the wrapped error.
  pub fn status(&self) -> StatusCode {
    match &self.0 {
      e if e.is_client_error() => StatusCode::BAD_REQUEST,
      ScholarError::NotFound => StatusCode::NOT_FOUND,
      ScholarError::DuplicatePublication(_) => StatusCode::CONFLICT,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<ScholarError> for ApiError {
  fn from(error: ScholarError) -> Self { Self(error) }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    Self(ScholarError::InvalidRequest(rejection.body_text()))
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    Self(ScholarError::InvalidRequest(rejection.body_text()))
  }
}

/// Path extraction that fails with an [`ApiError`].
type IdPath = core::result::Result<extract::Path<i64>, PathRejection>;

/// JSON body extraction that fails with an [`ApiError`].
type JsonBody<T> = core::result::Result<Json<T>, JsonRejection>;

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      warn!("Request failed: {}", self.0);
    }
    (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
  }
}

/// Query string of the list route.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  /// Optional search text
  pub q: Option<String>,
}

/// Query string of the summary route.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
  /// Requested format; absent is rejected like an unknown one
  pub format: Option<String>,
  /// Grouping dimension, `year` when absent
  pub filter: Option<String>,
}

/// Builds the router serving the catalogue.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/users/{user_id}/publications", get(list_publications).post(create_publication))
    .route("/users/{user_id}/publications/summary", get(download_summary))
    .route(
      "/publications/{id}",
      get(get_publication).put(update_publication).delete(delete_publication),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Serves the catalogue on `config.bind_address` until the process stops.
pub async fn serve(config: &Config, database: Database) -> Result<()> {
  let listener = TcpListener::bind(&config.bind_address).await?;
  info!("Serving publications on {}", listener.local_addr()?);
  axum::serve(listener, router(AppState::new(database))).await?;
  Ok(())
}

/// GET /users/{user_id}/publications
async fn list_publications(
  State(state): State<AppState>,
  user_id: IdPath,
  extract::Query(params): extract::Query<ListParams>,
) -> core::result::Result<Json<Vec<Publication>>, ApiError> {
  let extract::Path(user_id) = user_id?;
  let mut db = state.database.lock().await;
  let publications = match params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
    Some(text) => Query::text(text).for_user(user_id).execute(&mut db).await?,
    None => Query::by_user(user_id).execute(&mut db).await?,
  };
  Ok(Json(publications))
}

/// POST /users/{user_id}/publications
async fn create_publication(
  State(state): State<AppState>,
  user_id: IdPath,
  new: JsonBody<NewPublication>,
) -> core::result::Result<(StatusCode, Json<Publication>), ApiError> {
  let extract::Path(user_id) = user_id?;
  let Json(new) = new?;
  let mut publication = new.into_publication(user_id);
  let mut db = state.database.lock().await;
  let id = Add::publication(&publication).execute(&mut db).await?;
  publication.id = Some(id);
  Ok((StatusCode::CREATED, Json(publication)))
}

/// GET /publications/{id}
async fn get_publication(
  State(state): State<AppState>,
  id: IdPath,
) -> core::result::Result<Json<Publication>, ApiError> {
  let extract::Path(id) = id?;
  let mut db = state.database.lock().await;
  let publication = Query::by_id(id).execute(&mut db).await?.pop().ok_or(ScholarError::NotFound)?;
  Ok(Json(publication))
}

/// PUT /publications/{id}
async fn update_publication(
  State(state): State<AppState>,
  id: IdPath,
  changes: JsonBody<PublicationChanges>,
) -> core::result::Result<Json<Publication>, ApiError> {
  let extract::Path(id) = id?;
  let Json(changes) = changes?;
  let mut db = state.database.lock().await;
  let publication = Update::new(id, changes).execute(&mut db).await?;
  Ok(Json(publication))
}

/// DELETE /publications/{id}
async fn delete_publication(
  State(state): State<AppState>,
  id: IdPath,
) -> core::result::Result<StatusCode, ApiError> {
  let extract::Path(id) = id?;
  let mut db = state.database.lock().await;
  let removed = Remove::by_id(id).execute(&mut db).await?;
  if removed.is_empty() {
    return Err(ScholarError::NotFound.into());
  }
  Ok(StatusCode::NO_CONTENT)
}

/// GET /users/{user_id}/publications/summary
async fn download_summary(
  State(state): State<AppState>,
  user_id: IdPath,
  extract::Query(params): extract::Query<SummaryParams>,
) -> core::result::Result<Response, ApiError> {
  let extract::Path(user_id) = user_id?;
  let publications = {
    let mut db = state.database.lock().await;
    Query::by_user(user_id).execute(&mut db).await?
  };

  let artifact = generate_summary(
    &publications,
    params.format.as_deref().unwrap_or_default(),
    params.filter.as_deref().unwrap_or("year"),
  )?;

  Ok(
    (
      [
        (header::CONTENT_TYPE, artifact.content_type.to_string()),
        (header::CONTENT_DISPOSITION, artifact.content_disposition()),
      ],
      artifact.content,
    )
      .into_response(),
  )
}
