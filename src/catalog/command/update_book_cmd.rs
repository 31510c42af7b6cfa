use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDto, BookPatch};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct UpdateBookCommandRequest {
    pub isbn13: String,
    pub patch: BookPatch,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn13: &str, patch: BookPatch) -> Self {
        Self {
            isbn13: isbn13.to_string(),
            patch,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: format!("book {} updated successfully", book.isbn13),
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.isbn13.as_str(), &req.patch).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
