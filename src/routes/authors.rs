use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::models::records::{Author, AuthorRecord};
use crate::models::responses::AuthorResponse;
use crate::models::storage::LibraryStore;

type Store = Arc<dyn LibraryStore + Send + Sync>;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: Option<String>,
    pub biography: Option<String>,
}

pub async fn create_author(
    State(store): State<Store>,
    payload: Result<Json<CreateAuthorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthorResponse>), ApiError> {
    let Json(payload) = payload?;

    let name = payload.name.filter(|name| !name.is_empty());
    let biography = payload.biography.filter(|biography| !biography.is_empty());
    let (name, biography) = match (name, biography) {
        (Some(name), Some(biography)) => (name, biography),
        _ => {
            return Err(ApiError::MissingFields(
                "El nombre del autor y la biografía son campos requeridos.".to_string(),
            ))
        }
    };

    let record = AuthorRecord {
        id: None,
        name: name.clone(),
        biography: biography.clone(),
    };
    let inserted_id = store.insert_author(&record).await?;
    info!("Created author {} ({})", inserted_id.to_hex(), name);

    let autor = Author {
        id: inserted_id.to_hex(),
        name,
        biography,
    };

    Ok((
        StatusCode::CREATED,
        Json(AuthorResponse {
            message: "Autor creado exitosamente".to_string(),
            autor,
        }),
    ))
}
