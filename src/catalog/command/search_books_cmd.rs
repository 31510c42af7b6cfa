use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::search::SearchCriteria;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
    default_search_key: String,
    default_items: usize,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, config: &Configuration) -> Self {
        Self {
            catalog_service,
            default_search_key: config.default_search_key.to_string(),
            default_items: config.default_items,
        }
    }
}

// search_key and items are kept as raw strings so that bad values are reported
// with the list of accepted ones.
#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    #[serde(default)]
    pub query: String,
    pub search_key: Option<String>,
    pub items: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str, search_key: Option<&str>, items: Option<&str>) -> Self {
        Self {
            query: query.to_string(),
            search_key: search_key.map(str::to_string),
            items: items.map(str::to_string),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub results: Vec<BookDto>,
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let search_key = req.search_key.unwrap_or_else(|| self.default_search_key.to_string());
        let items = req.items.unwrap_or_else(|| self.default_items.to_string());
        let criteria = SearchCriteria::parse(req.query.as_str(), search_key.as_str(), items.as_str())?;
        let results = self.catalog_service.find_books(&criteria).await?;
        Ok(SearchBooksCommandResponse { results })
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use tempfile::TempDir;
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::utils::fixtures::seeded_catalog_service;

    lazy_static! {
        static ref SEARCH_CMD : AsyncOnce<(TempDir, SearchBooksCommand)> = AsyncOnce::new(async {
                let (dir, svc) = seeded_catalog_service().await;
                (dir, SearchBooksCommand::new(svc, &Configuration::new("unused.json")))
            });
    }

    #[tokio::test]
    async fn test_should_search_by_title_by_default() {
        let (_, cmd) = SEARCH_CMD.get().await;

        let res = cmd.execute(SearchBooksCommandRequest::new("WALK", None, None)).await.expect("should search");
        assert_eq!(1, res.results.len());
        assert_eq!("A Walk to Life", res.results[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_cap_results_in_catalog_order() {
        let (_, cmd) = SEARCH_CMD.get().await;

        let res = cmd.execute(SearchBooksCommandRequest::new("fiction", Some("category"), Some("1"))).await.expect("should search");
        assert_eq!(1, res.results.len());
        assert_eq!("9780002005883", res.results[0].isbn13.as_str());

        let res = cmd.execute(SearchBooksCommandRequest::new("fiction", Some("category"), Some("5"))).await.expect("should search");
        let isbns: Vec<&str> = res.results.iter().map(|b| b.isbn13.as_str()).collect();
        assert_eq!(vec!["9780002005883", "9780006178736"], isbns);
    }

    #[tokio::test]
    async fn test_should_search_by_year() {
        let (_, cmd) = SEARCH_CMD.get().await;

        let res = cmd.execute(SearchBooksCommandRequest::new("198", Some("published_year"), Some("10"))).await.expect("should search");
        assert_eq!(1, res.results.len());
        assert_eq!(1982, res.results[0].published_year);
    }

    #[tokio::test]
    async fn test_should_return_empty_results() {
        let (_, cmd) = SEARCH_CMD.get().await;

        let res = cmd.execute(SearchBooksCommandRequest::new("no such book", None, None)).await.expect("should search");
        assert!(res.results.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_bad_parameters() {
        let (_, cmd) = SEARCH_CMD.get().await;

        let res = cmd.execute(SearchBooksCommandRequest::new("walk", Some("isbn13"), None)).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));

        let res = cmd.execute(SearchBooksCommandRequest::new("walk", None, Some("3"))).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));

        let res = cmd.execute(SearchBooksCommandRequest::new("walk", None, Some("many"))).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
