use async_trait::async_trait;
use indexmap::IndexMap;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::domain::search::SearchCriteria;
use crate::books::dto::{BookDto, BookPatch, validate_isbn13};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::CatalogResult;
use crate::utils::date::current_year;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto> {
        book.validate(current_year())?;
        let _ = self.book_repository.create(&BookEntity::from(book)).await?;
        info!("added book {}", book.id());
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn13: &str) -> CatalogResult<()> {
        let _ = self.book_repository.delete(isbn13).await?;
        info!("removed book {}", isbn13);
        Ok(())
    }

    async fn update_book(&self, isbn13: &str, patch: &BookPatch) -> CatalogResult<BookDto> {
        validate_isbn13(isbn13)?;
        patch.validate(isbn13, current_year())?;
        let merged = self.book_repository.merge(isbn13, patch).await?;
        info!("updated book {}", merged.id());
        Ok(BookDto::from(&merged))
    }

    async fn find_book_by_isbn(&self, isbn13: &str) -> CatalogResult<BookDto> {
        self.book_repository.get(isbn13).await.map(|b| BookDto::from(&b))
    }

    async fn find_books(&self, criteria: &SearchCriteria) -> CatalogResult<Vec<BookDto>> {
        let res = self.book_repository.search(criteria).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn all_books(&self) -> CatalogResult<IndexMap<String, BookDto>> {
        let res = self.book_repository.all().await?;
        Ok(res.iter().map(|b| (b.isbn13.to_string(), BookDto::from(b))).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn13: other.isbn13.to_string(),
            isbn10: other.isbn10.to_string(),
            title: other.title.to_string(),
            subtitle: other.subtitle.clone(),
            author: other.author.to_string(),
            category: other.category.clone(),
            thumbnail: other.thumbnail.to_string(),
            description: other.description.to_string(),
            published_year: other.published_year,
            num_pages: other.num_pages,
            ratings_count: other.ratings_count,
            average_rating: other.average_rating,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn13: other.isbn13.to_string(),
            isbn10: other.isbn10.to_string(),
            title: other.title.to_string(),
            subtitle: other.subtitle.clone(),
            author: other.author.to_string(),
            category: other.category.clone(),
            thumbnail: other.thumbnail.to_string(),
            description: other.description.to_string(),
            published_year: other.published_year,
            num_pages: other.num_pages,
            ratings_count: other.ratings_count,
            average_rating: other.average_rating,
        }
    }
}


#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use tempfile::TempDir;
    use crate::books::domain::search::SearchCriteria;
    use crate::books::dto::BookPatch;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::{CatalogError, SearchKey};
    use crate::utils::fixtures::{sample_book, seeded_data_file};

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<(TempDir, Box<dyn CatalogService>)> = AsyncOnce::new(async {
                let (dir, path) = seeded_data_file().await;
                let config = Configuration::new(path.to_string_lossy().as_ref());
                let svc = factory::create_catalog_service(&config).await.expect("should create service");
                (dir, svc)
            });
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let (_, catalog_svc) = SUT_SVC.get().await;

        let book = sample_book("9781000000001", "test book");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn13.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let (_, catalog_svc) = SUT_SVC.get().await;

        let book = sample_book("9781000000002", "test book");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let res = catalog_svc.add_book(&sample_book("9781000000002", "other book")).await;
        assert!(matches!(res, Err(CatalogError::DuplicateKey { .. })));

        let loaded = catalog_svc.find_book_by_isbn(book.isbn13.as_str()).await.expect("should return book");
        assert_eq!("test book", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_book() {
        let (_, catalog_svc) = SUT_SVC.get().await;

        let mut book = sample_book("9781000000003", "test book");
        book.published_year = 0;
        assert!(matches!(catalog_svc.add_book(&book).await, Err(CatalogError::Validation { .. })));
        assert!(catalog_svc.find_book_by_isbn("9781000000003").await.is_err());

        let short = sample_book("97810000", "test book");
        assert!(matches!(catalog_svc.add_book(&short).await, Err(CatalogError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let (_, catalog_svc) = SUT_SVC.get().await;

        let book = sample_book("9781000000004", "test book");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let patch = BookPatch { title: Some("New Title".to_string()), ..Default::default() };
        let updated = catalog_svc.update_book(book.isbn13.as_str(), &patch).await.expect("should update book");
        assert_eq!("New Title", updated.title.as_str());

        let loaded = catalog_svc.find_book_by_isbn(book.isbn13.as_str()).await.expect("should return book");
        let mut expected = book.clone();
        expected.title = "New Title".to_string();
        assert_eq!(expected, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_bad_update() {
        let (_, catalog_svc) = SUT_SVC.get().await;

        let res = catalog_svc.update_book("978100", &BookPatch::default()).await;
        assert!(matches!(res, Err(CatalogError::Validation { .. })));

        let res = catalog_svc.update_book("9781999999999", &BookPatch::default()).await;
        assert!(matches!(res, Err(CatalogError::NotFound { .. })));

        let patch = BookPatch { published_year: Some(100000), ..Default::default() };
        let res = catalog_svc.update_book("9780002005883", &patch).await;
        assert!(matches!(res, Err(CatalogError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_find_books() {
        let (_, catalog_svc) = SUT_SVC.get().await;

        let res = catalog_svc.find_books(&SearchCriteria::new("christie", SearchKey::Author, 10))
            .await.expect("should search");
        assert_eq!(1, res.len());
        assert_eq!("9780002261982", res[0].isbn13.as_str());

        let res = catalog_svc.find_books(&SearchCriteria::new("xyzzy", SearchKey::Title, 10))
            .await.expect("should search");
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn test_should_list_all_books() {
        let (_, catalog_svc) = SUT_SVC.get().await;

        let all = catalog_svc.all_books().await.expect("should list books");
        assert!(all.len() >= 4);
        assert_eq!(Some(&"9780002005883".to_string()), all.keys().next());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let (_, catalog_svc) = SUT_SVC.get().await;

        let book = sample_book("9781000000005", "test book");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let _ = catalog_svc.remove_book(book.isbn13.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn13.as_str()).await;
        assert!(loaded.is_err());
        let again = catalog_svc.remove_book(book.isbn13.as_str()).await;
        assert!(matches!(again, Err(CatalogError::NotFound { .. })));
    }
}
