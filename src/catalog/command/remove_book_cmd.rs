use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandRequest {
    pub isbn13: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn13: String) -> Self {
        Self {
            isbn13,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new(isbn13: &str) -> Self {
        Self {
            message: format!("book {} deleted successfully", isbn13),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.isbn13.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new(req.isbn13.as_str()))
    }
}
