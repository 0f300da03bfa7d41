use serde::{Deserialize, Serialize};

use crate::models::records::{Author, Book};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookDetailResponse {
    pub libro: Book,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub message: String,
    pub libro: Book,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub message: String,
    pub autor: Author,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}
