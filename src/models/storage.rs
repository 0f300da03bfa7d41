use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson};
use mongodb::results::InsertOneResult;
use mongodb::{Client, Collection};
use thiserror::Error;

use crate::models::records::{AuthorRecord, BookRecord};

pub const DATABASE_NAME: &str = "biblioteca";
pub const AUTHORS_COLLECTION: &str = "autores";
pub const BOOKS_COLLECTION: &str = "libros";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("unexpected document id: {0}")]
    UnexpectedId(Bson),
}

#[async_trait]
pub trait LibraryStore {
    async fn list_books(&self, title: Option<&str>) -> Result<Vec<BookRecord>, StorageError>;
    async fn find_book(&self, id: ObjectId) -> Result<Option<BookRecord>, StorageError>;
    async fn insert_book(&self, record: &BookRecord) -> Result<ObjectId, StorageError>;
    async fn update_book(
        &self,
        id: ObjectId,
        title: &str,
        authors: &[ObjectId],
    ) -> Result<bool, StorageError>;
    async fn delete_book(&self, id: ObjectId) -> Result<bool, StorageError>;
    async fn insert_author(&self, record: &AuthorRecord) -> Result<ObjectId, StorageError>;
    async fn find_authors_by_ids(
        &self,
        ids: &[ObjectId],
    ) -> Result<Vec<AuthorRecord>, StorageError>;
    async fn ping(&self) -> Result<(), StorageError>;
}

pub struct MongoStore {
    client: Client,
    authors: Collection<AuthorRecord>,
    books: Collection<BookRecord>,
}

impl MongoStore {
    pub async fn new(mongo_url: &str) -> Result<Self, StorageError> {
        let client = Client::with_uri_str(mongo_url).await?;
        let db = client.database(DATABASE_NAME);

        Ok(Self {
            authors: db.collection(AUTHORS_COLLECTION),
            books: db.collection(BOOKS_COLLECTION),
            client,
        })
    }
}

fn inserted_object_id(result: InsertOneResult) -> Result<ObjectId, StorageError> {
    match result.inserted_id.as_object_id() {
        Some(id) => Ok(id),
        None => Err(StorageError::UnexpectedId(result.inserted_id)),
    }
}

#[async_trait]
impl LibraryStore for MongoStore {
    async fn list_books(&self, title: Option<&str>) -> Result<Vec<BookRecord>, StorageError> {
        let filter = match title {
            Some(title) => doc! { "title": title },
            None => doc! {},
        };

        let cursor = self.books.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_book(&self, id: ObjectId) -> Result<Option<BookRecord>, StorageError> {
        Ok(self.books.find_one(doc! { "_id": id }).await?)
    }

    async fn insert_book(&self, record: &BookRecord) -> Result<ObjectId, StorageError> {
        let result = self.books.insert_one(record).await?;
        inserted_object_id(result)
    }

    async fn update_book(
        &self,
        id: ObjectId,
        title: &str,
        authors: &[ObjectId],
    ) -> Result<bool, StorageError> {
        // copies is deliberately left out of the $set.
        let result = self
            .books
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "title": title, "authors": authors.to_vec() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete_book(&self, id: ObjectId) -> Result<bool, StorageError> {
        let result = self.books.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn insert_author(&self, record: &AuthorRecord) -> Result<ObjectId, StorageError> {
        let result = self.authors.insert_one(record).await?;
        inserted_object_id(result)
    }

    async fn find_authors_by_ids(
        &self,
        ids: &[ObjectId],
    ) -> Result<Vec<AuthorRecord>, StorageError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .authors
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.client
            .database(DATABASE_NAME)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
