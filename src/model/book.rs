use super::validation::{in_range, patched, positive_id, text_len, ValidationError};
use resource_framework::{Filter, Patch};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const RATING: RangeInclusive<u8> = 1..=5;
pub const PUBLISHED_DATE: RangeInclusive<u16> = 2000..=2030;
const TITLE: RangeInclusive<usize> = 3..=usize::MAX;
const AUTHOR: RangeInclusive<usize> = 1..=usize::MAX;
const DESCRIPTION: RangeInclusive<usize> = 1..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        BookId(id)
    }
}

impl From<BookId> for u32 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A book in the public catalogue.
///
/// # Resource Framework
/// This struct implements the [`ActorEntity`](resource_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_framework::ResourceActor).
///
/// See [`impl ActorEntity for Book`](#impl-ActorEntity-for-Book) for details on:
/// - Creation parameters ([`BookCreate`])
/// - Patch parameters ([`BookPatch`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: u8,
    pub published_date: u16,
}

/// Payload for creating a new book. An `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: u8,
    pub published_date: u16,
}

impl BookCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        text_len("title", &self.title, TITLE)?;
        text_len("author", &self.author, AUTHOR)?;
        text_len("description", &self.description, DESCRIPTION)?;
        in_range("rating", self.rating, RATING)?;
        in_range("published_date", self.published_date, PUBLISHED_DATE)
    }
}

/// Body of `PUT /update-book`: the target id plus the fields to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookUpdate {
    pub id: BookId,
    #[serde(flatten)]
    pub patch: BookPatch,
}

impl BookUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive_id("id", self.id)?;
        self.patch.validate()
    }

    pub fn into_parts(self) -> (BookId, BookPatch) {
        (self.id, self.patch)
    }
}

/// Sparse changes to a book. Fields left out of the body stay as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub author: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub rating: Patch<u8>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub published_date: Patch<u16>,
}

impl BookPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        patched("title", &self.title, |v| text_len("title", v, TITLE))?;
        patched("author", &self.author, |v| text_len("author", v, AUTHOR))?;
        patched("description", &self.description, |v| {
            text_len("description", v, DESCRIPTION)
        })?;
        patched("rating", &self.rating, |v| in_range("rating", *v, RATING))?;
        patched("published_date", &self.published_date, |v| {
            in_range("published_date", *v, PUBLISHED_DATE)
        })
    }
}

/// Query string of `GET /books`. Both filters are optional and combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BookQuery {
    pub book_rating: Option<u8>,
    pub published_date: Option<u16>,
}

impl BookQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(rating) = self.book_rating {
            in_range("book_rating", rating, RATING)?;
        }
        if let Some(year) = self.published_date {
            in_range("published_date", year, PUBLISHED_DATE)?;
        }
        Ok(())
    }

    pub fn filter(&self) -> Filter<Book> {
        let Self {
            book_rating,
            published_date,
        } = *self;
        Filter::new(move |book: &Book| {
            book_rating.map_or(true, |r| book.rating == r)
                && published_date.map_or(true, |y| book.published_date == y)
        })
    }
}

/// The catalogue every fresh books service starts with.
pub fn seed_books() -> Vec<Book> {
    [
        ("Computer Science Pro", "codingwithroby", "A very nice book!", 5, 2030),
        ("Be Fast with FastAPI", "codingwithroby", "A great book!", 5, 2030),
        ("Master Endpoints", "codingwithroby", "A awesome book!", 5, 2029),
        ("HP1", "Author 1", "Book Description", 2, 2028),
        ("HP2", "Author 2", "Book Description", 3, 2027),
        ("HP3", "Author 3", "Book Description", 1, 2026),
    ]
    .into_iter()
    .zip(1u32..)
    .map(
        |((title, author, description, rating, published_date), id)| Book {
            id: BookId(id),
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
            published_date,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> BookCreate {
        BookCreate {
            title: "Rust in Action".into(),
            author: "Tim".into(),
            description: "Systems programming".into(),
            rating: 4,
            published_date: 2021,
        }
    }

    #[test]
    fn create_constraints() {
        assert!(create().validate().is_ok());

        let short_title = BookCreate {
            title: "Ru".into(),
            ..create()
        };
        assert_eq!(short_title.validate().unwrap_err().field, "title");

        let bad_rating = BookCreate {
            rating: 6,
            ..create()
        };
        assert_eq!(bad_rating.validate().unwrap_err().field, "rating");

        let too_old = BookCreate {
            published_date: 1999,
            ..create()
        };
        assert_eq!(too_old.validate().unwrap_err().field, "published_date");

        let long_description = BookCreate {
            description: "x".repeat(101),
            ..create()
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn create_ignores_a_client_supplied_id() {
        let body = r#"{"id": 42, "title": "Rust in Action", "author": "Tim",
            "description": "Systems programming", "rating": 4, "published_date": 2021}"#;
        let parsed: BookCreate = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, create());
    }

    #[test]
    fn update_body_splits_into_id_and_patch() {
        let body = r#"{"id": 2, "title": "Y"}"#;
        let update: BookUpdate = serde_json::from_str(body).unwrap();
        let (id, patch) = update.into_parts();
        assert_eq!(id, BookId(2));
        assert_eq!(patch.title, Patch::Value("Y".to_string()));
        assert!(patch.author.is_absent());
    }

    #[test]
    fn update_rejects_null_and_out_of_range_fields() {
        let null_author: BookUpdate = serde_json::from_str(r#"{"id": 1, "author": null}"#).unwrap();
        assert_eq!(null_author.validate().unwrap_err().field, "author");

        let future: BookUpdate =
            serde_json::from_str(r#"{"id": 1, "published_date": 2031}"#).unwrap();
        assert_eq!(future.validate().unwrap_err().field, "published_date");

        let zero: BookUpdate = serde_json::from_str(r#"{"id": 0, "rating": 3}"#).unwrap();
        assert_eq!(zero.validate().unwrap_err().field, "id");
    }

    #[test]
    fn query_filters_combine() {
        let books = seed_books();
        let query = BookQuery {
            book_rating: Some(5),
            published_date: Some(2030),
        };
        let filter = query.filter();
        let ids: Vec<_> = books.iter().filter(|b| filter.matches(b)).map(|b| b.id).collect();
        assert_eq!(ids, vec![BookId(1), BookId(2)]);

        assert!(BookQuery::default().filter().matches(&books[5]));
        assert!(BookQuery {
            book_rating: Some(0),
            published_date: None
        }
        .validate()
        .is_err());
    }

    #[test]
    fn seeds_are_valid_and_numbered_from_one() {
        let books = seed_books();
        assert_eq!(books.len(), 6);
        for (book, expected) in books.iter().zip(1u32..) {
            assert_eq!(book.id, BookId(expected));
            let as_create = BookCreate {
                title: book.title.clone(),
                author: book.author.clone(),
                description: book.description.clone(),
                rating: book.rating,
                published_date: book.published_date,
            };
            assert!(as_create.validate().is_ok(), "seed {} is invalid", book.id);
        }
    }
}
