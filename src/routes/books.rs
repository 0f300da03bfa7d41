use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::models::records::{Book, BookRecord};
use crate::models::responses::{BookDetailResponse, BookResponse, BooksResponse, DeleteResponse};
use crate::models::storage::LibraryStore;
use crate::services::resolver::{missing_author_ids, resolve_authors, resolve_book};
use crate::utils::ids::{parse_author_ids, parse_object_id};

type Store = Arc<dyn LibraryStore + Send + Sync>;

#[derive(Debug, Deserialize)]
pub struct ListBooksParams {
    pub titulo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookIdParams {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub copies: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub copies: Option<i64>,
}

pub async fn list_books(
    Query(params): Query<ListBooksParams>,
    State(store): State<Store>,
) -> Result<Json<BooksResponse>, ApiError> {
    info!("Listing books: {:?}", params);

    // An empty titulo counts as absent, like every other presence check.
    let titulo = params.titulo.as_deref().filter(|titulo| !titulo.is_empty());
    let records = store.list_books(titulo).await?;
    if let Some(titulo) = titulo {
        if records.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No se encontraron libros con ese título: {}",
                titulo
            )));
        }
    }

    let mut books = Vec::with_capacity(records.len());
    for record in records {
        books.push(resolve_book(record, &store).await?);
    }

    Ok(Json(BooksResponse { books }))
}

pub async fn get_book(
    Query(params): Query<BookIdParams>,
    State(store): State<Store>,
) -> Result<Json<BookDetailResponse>, ApiError> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::MissingId("Bad request, id missing".to_string()))?;
    let book_id = parse_object_id(&id)?;

    match store.find_book(book_id).await? {
        Some(record) => {
            let libro = resolve_book(record, &store).await?;
            Ok(Json(BookDetailResponse { libro }))
        }
        None => Err(ApiError::NotFound(format!(
            "Libro no encontrado. id: {}",
            id
        ))),
    }
}

pub async fn create_book(
    State(store): State<Store>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let Json(payload) = payload?;

    let title = payload.title.filter(|title| !title.is_empty());
    let (title, raw_authors) = match (title, payload.authors) {
        (Some(title), Some(authors)) => (title, authors),
        _ => {
            return Err(ApiError::MissingFields(
                "El título y los autores son campos requeridos.".to_string(),
            ))
        }
    };

    let author_ids = parse_author_ids(&raw_authors)?;
    let found = store.find_authors_by_ids(&author_ids).await?;
    let missing = missing_author_ids(&author_ids, &found);
    if !missing.is_empty() {
        return Err(ApiError::UnknownAuthors {
            missing: missing.iter().map(|id| id.to_hex()).collect(),
        });
    }

    let record = BookRecord {
        id: None,
        title: title.clone(),
        authors: author_ids,
        copies: payload.copies,
    };
    let inserted_id = store.insert_book(&record).await?;
    info!("Created book {} ({})", inserted_id.to_hex(), title);

    let libro = Book {
        id: inserted_id.to_hex(),
        title,
        authors: resolve_authors(found),
        copies: payload.copies,
    };

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: "Libro creado exitosamente".to_string(),
            libro,
        }),
    ))
}

pub async fn update_book(
    State(store): State<Store>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Json(payload) = payload?;

    let id = payload.id.filter(|id| !id.is_empty());
    let title = payload.title.filter(|title| !title.is_empty());
    let (id, title, raw_authors) = match (id, title, payload.authors) {
        (Some(id), Some(title), Some(authors)) => (id, title, authors),
        _ => return Err(ApiError::MissingFields("Faltan campos".to_string())),
    };

    let book_id = parse_object_id(&id)?;
    let author_ids = parse_author_ids(&raw_authors)?;
    let found = store.find_authors_by_ids(&author_ids).await?;
    let missing = missing_author_ids(&author_ids, &found);
    if !missing.is_empty() {
        return Err(ApiError::UnknownAuthors {
            missing: missing.iter().map(|id| id.to_hex()).collect(),
        });
    }

    let matched = store.update_book(book_id, &title, &author_ids).await?;
    if !matched {
        return Err(ApiError::NotFound("El ID del libro no existe.".to_string()));
    }
    info!("Updated book {}", id);

    // copies is echoed from the request but never written by the update.
    let libro = Book {
        id,
        title,
        authors: resolve_authors(found),
        copies: payload.copies,
    };

    Ok(Json(BookResponse {
        message: "Libro actualizado exitosamente".to_string(),
        libro,
    }))
}

pub async fn delete_book(
    Query(params): Query<BookIdParams>,
    State(store): State<Store>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::MissingId("Bad request, missing id field".to_string()))?;
    let book_id = parse_object_id(&id)?;

    if store.delete_book(book_id).await? {
        info!("Deleted book {}", id);
        Ok(Json(DeleteResponse {
            message: "Libro eliminado exitosamente.".to_string(),
        }))
    } else {
        Err(ApiError::NotFound("Libro no encontrado.".to_string()))
    }
}
