use std::collections::HashSet;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::models::records::{Author, AuthorRecord, Book, BookRecord};
use crate::models::storage::{LibraryStore, StorageError};

type Store = Arc<dyn LibraryStore + Send + Sync>;

pub fn author_to_wire(record: AuthorRecord) -> Author {
    Author {
        id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
        name: record.name,
        biography: record.biography,
    }
}

pub fn resolve_authors(records: Vec<AuthorRecord>) -> Vec<Author> {
    records.into_iter().map(author_to_wire).collect()
}

// Maps each requested id to found/not-found; duplicates in the request
// collapse onto the same stored author instead of tripping the check.
pub fn missing_author_ids(requested: &[ObjectId], found: &[AuthorRecord]) -> Vec<ObjectId> {
    let known: HashSet<ObjectId> = found.iter().filter_map(|author| author.id).collect();

    let mut missing = Vec::new();
    for id in requested {
        if !known.contains(id) && !missing.contains(id) {
            missing.push(*id);
        }
    }

    missing
}

// Ids that no longer resolve just shrink the authors list. The lookup,
// not the stored id order, decides the order of the resolved authors.
pub async fn resolve_book(record: BookRecord, store: &Store) -> Result<Book, StorageError> {
    let authors = store.find_authors_by_ids(&record.authors).await?;

    Ok(Book {
        id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
        title: record.title,
        authors: resolve_authors(authors),
        copies: record.copies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str) -> AuthorRecord {
        AuthorRecord {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            biography: format!("{} bio", name),
        }
    }

    #[test]
    fn wire_form_renders_the_id_as_hex() {
        let record = author("Ada");
        let id = record.id.unwrap();

        let wire = author_to_wire(record);
        assert_eq!(wire.id, id.to_hex());
        assert_eq!(wire.name, "Ada");
        assert_eq!(wire.biography, "Ada bio");
    }

    #[test]
    fn no_ids_are_missing_when_all_resolve() {
        let found = vec![author("Ada"), author("Grace")];
        let requested: Vec<ObjectId> = found.iter().filter_map(|a| a.id).collect();

        assert!(missing_author_ids(&requested, &found).is_empty());
    }

    #[test]
    fn unresolved_ids_are_reported_once() {
        let found = vec![author("Ada")];
        let ghost = ObjectId::new();
        let requested = vec![found[0].id.unwrap(), ghost, ghost];

        assert_eq!(missing_author_ids(&requested, &found), vec![ghost]);
    }

    #[test]
    fn duplicate_requested_ids_do_not_trip_the_check() {
        let found = vec![author("Ada")];
        let id = found[0].id.unwrap();
        let requested = vec![id, id, id];

        assert!(missing_author_ids(&requested, &found).is_empty());
    }

    #[test]
    fn resolution_keeps_the_lookup_order() {
        let records = vec![author("Ada"), author("Grace"), author("Mary")];
        let names: Vec<String> = resolve_authors(records)
            .into_iter()
            .map(|author| author.name)
            .collect();

        assert_eq!(names, vec!["Ada", "Grace", "Mary"]);
    }
}
