use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::domain::Configuration;

pub(crate) fn sample_book(isbn13: &str, title: &str) -> BookDto {
    BookDto {
        isbn13: isbn13.to_string(),
        isbn10: isbn13.chars().skip(3).collect(),
        title: title.to_string(),
        subtitle: Some("A Novel".to_string()),
        author: "Jane Doe".to_string(),
        category: Some("Fiction".to_string()),
        thumbnail: format!("http://books.example.com/covers/{}.jpg", isbn13),
        description: format!("{} is a book used in tests", title),
        published_year: 2001,
        num_pages: 240,
        ratings_count: Some(12),
        average_rating: Some(3.75),
    }
}

pub(crate) fn sample_entity(isbn13: &str, title: &str) -> BookEntity {
    let book = sample_book(isbn13, title);
    BookEntity::from(&book)
}

const SEED: &str = r#"{
  "9780002005883": {
    "isbn10": "0002005883",
    "title": "A Walk to Life",
    "subtitle": null,
    "author": "Marguerite Weber",
    "category": "Fiction",
    "thumbnail": "http://books.example.com/covers/9780002005883.jpg",
    "description": "A woman leaves the city and walks back into her own past.",
    "published_year": 2001,
    "num_pages": 292,
    "ratings_count": 1624,
    "average_rating": 3.85
  },
  "9780002261982": {
    "isbn10": "0002261987",
    "title": "Spider's Web",
    "subtitle": "A Novel",
    "author": "Charles Osborne;Agatha Christie",
    "category": "Detective and mystery stories",
    "thumbnail": "http://books.example.com/covers/9780002261982.jpg",
    "description": "A new 'Christie for Christmas' full-length novel adapted from the play.",
    "published_year": 2000,
    "num_pages": 241,
    "ratings_count": 5164,
    "average_rating": 3.83
  },
  "9780006163831": {
    "isbn13": "9780006163831",
    "isbn10": "0006163831",
    "title": "The One Tree",
    "author": "Stephen R. Donaldson",
    "category": null,
    "thumbnail": "http://books.example.com/covers/9780006163831.jpg",
    "description": "Volume two of the second chronicles, a sea voyage to find the One Tree.",
    "published_year": 1982,
    "num_pages": 479,
    "ratings_count": null,
    "average_rating": null
  },
  "9780006178736": {
    "isbn10": "0006178731",
    "title": "Rage of Angels",
    "author": "Sidney Sheldon",
    "category": "Fiction",
    "thumbnail": "http://books.example.com/covers/9780006178736.jpg",
    "description": "A lawyer's career is threatened by a mob boss.",
    "published_year": 1993,
    "num_pages": 512,
    "ratings_count": 29532,
    "average_rating": 3.93
  }
}"#;

// a catalog document with four books in a fresh temp dir, removed when the dir is dropped
pub(crate) async fn seeded_data_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("books_data.json");
    tokio::fs::write(&path, SEED).await.expect("should write seed document");
    (dir, path)
}

pub(crate) async fn seeded_catalog_service() -> (TempDir, Arc<dyn CatalogService>) {
    let (dir, path) = seeded_data_file().await;
    let config = Configuration::new(path.to_string_lossy().as_ref());
    let svc = factory::create_catalog_service(&config).await.expect("should create service");
    (dir, Arc::from(svc))
}
