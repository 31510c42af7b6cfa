pub mod json_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::domain::search::SearchCriteria;
use crate::books::dto::BookPatch;
use crate::core::library::CatalogResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // overwrites the supplied fields of an existing book and returns the merged record
    async fn merge(&self, isbn13: &str, patch: &BookPatch) -> CatalogResult<BookEntity>;

    async fn search(&self, criteria: &SearchCriteria) -> CatalogResult<Vec<BookEntity>>;
}
