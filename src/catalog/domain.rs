pub mod service;

use async_trait::async_trait;
use indexmap::IndexMap;
use crate::books::domain::search::SearchCriteria;
use crate::books::dto::{BookDto, BookPatch};
use crate::core::library::CatalogResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto>;
    async fn remove_book(&self, isbn13: &str) -> CatalogResult<()>;
    async fn update_book(&self, isbn13: &str, patch: &BookPatch) -> CatalogResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn13: &str) -> CatalogResult<BookDto>;
    async fn find_books(&self, criteria: &SearchCriteria) -> CatalogResult<Vec<BookDto>>;
    async fn all_books(&self) -> CatalogResult<IndexMap<String, BookDto>>;
}
