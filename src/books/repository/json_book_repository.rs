use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::info;

use crate::books::domain::model::BookEntity;
use crate::books::domain::search::SearchCriteria;
use crate::books::dto::BookPatch;
use crate::books::repository::BookRepository;
use crate::core::library::{CatalogError, CatalogResult};
use crate::core::repository::Repository;
use crate::utils::json_file;

// JsonBookRepository keeps the whole catalog in memory and writes the complete
// document back after every mutation. Writers hold the lock until the document is
// replaced, so mutations are serialized and never observe each other half-done.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
    books: RwLock<IndexMap<String, BookEntity>>,
}

impl JsonBookRepository {
    pub async fn open(path: &Path) -> CatalogResult<Self> {
        let books = load(path).await?;
        info!("loaded {} books from {}", books.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            books: RwLock::new(books),
        })
    }

    // Applies `mutate` to a copy of the catalog, persists the copy and only then
    // makes it visible. A failed mutation or save leaves the catalog as it was.
    async fn mutate<T, F>(&self, mutate: F) -> CatalogResult<T>
        where F: FnOnce(&mut IndexMap<String, BookEntity>) -> CatalogResult<T> + Send,
              T: Send {
        let mut books = self.books.write().await;
        let mut next = books.clone();
        let res = mutate(&mut next)?;
        save(&self.path, &next).await?;
        *books = next;
        Ok(res)
    }
}

pub async fn load(path: &Path) -> CatalogResult<IndexMap<String, BookEntity>> {
    let mut books: IndexMap<String, BookEntity> = json_file::load(path).await?;
    for (isbn13, book) in books.iter_mut() {
        book.isbn13 = isbn13.to_string();
    }
    Ok(books)
}

pub async fn save(path: &Path, books: &IndexMap<String, BookEntity>) -> CatalogResult<()> {
    json_file::save(path, books).await
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn create(&self, entity: &BookEntity) -> CatalogResult<usize> {
        let entity = entity.clone();
        self.mutate(move |books| {
            if books.contains_key(entity.isbn13.as_str()) {
                return Err(CatalogError::duplicate_key(
                    format!("A book with isbn13 {} already exists", entity.isbn13).as_str()));
            }
            books.insert(entity.isbn13.to_string(), entity);
            Ok(1)
        }).await
    }

    async fn get(&self, id: &str) -> CatalogResult<BookEntity> {
        let books = self.books.read().await;
        books.get(id).cloned().ok_or_else(||
            CatalogError::not_found(format!("Invalid ISBN {}, no book is registered under it", id).as_str()))
    }

    async fn delete(&self, id: &str) -> CatalogResult<usize> {
        self.mutate(|books| {
            books.shift_remove(id).map(|_| 1).ok_or_else(||
                CatalogError::not_found(format!("ISBN {} not found in records", id).as_str()))
        }).await
    }

    async fn all(&self) -> CatalogResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn merge(&self, isbn13: &str, patch: &BookPatch) -> CatalogResult<BookEntity> {
        self.mutate(|books| {
            let book = books.get_mut(isbn13).ok_or_else(||
                CatalogError::not_found(format!("ISBN {} does not exist", isbn13).as_str()))?;
            book.apply(patch);
            Ok(book.clone())
        }).await
    }

    async fn search(&self, criteria: &SearchCriteria) -> CatalogResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(criteria.collect(books.values()))
    }
}
