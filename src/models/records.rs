use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// Persisted shapes. Books store author ids only; the embedded author data
// exists solely in the wire forms below.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub biography: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub authors: Vec<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copies: Option<i64>,
}

// Wire shapes returned to clients, ids rendered as hex strings.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub biography: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub authors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copies: Option<i64>,
}
