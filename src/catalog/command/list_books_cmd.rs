use std::sync::Arc;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

// serialized as the catalog mapping itself, keyed by isbn13 in catalog order
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListBooksCommandResponse {
    pub books: IndexMap<String, BookDto>,
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = self.catalog_service.all_books().await?;
        Ok(ListBooksCommandResponse { books })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::core::command::Command;
    use crate::utils::fixtures::seeded_catalog_service;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let (_dir, svc) = seeded_catalog_service().await;
        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await.expect("should list books");
        let isbns: Vec<&str> = res.books.keys().map(String::as_str).collect();
        assert_eq!(vec!["9780002005883", "9780002261982", "9780006163831", "9780006178736"], isbns);

        let json = serde_json::to_string(&res).expect("should serialize");
        assert!(json.starts_with("{\"9780002005883\":"));
    }
}
