use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::CatalogResult;

pub async fn create_book_repository(config: &Configuration) -> CatalogResult<Box<dyn BookRepository>> {
    let repo = JsonBookRepository::open(config.data_file.as_path()).await?;
    Ok(Box::new(repo))
}
