use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct AddBookCommandRequest {
    pub book: BookDto,
}

impl AddBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: format!("book {} added successfully", book.isbn13),
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
