use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookField;

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandRequest {
    pub isbn13: String,
    // `all` or the name of a single field to project
    pub key: Option<String>,
}

impl GetBookCommandRequest {
    pub fn new(isbn13: &str, key: Option<&str>) -> Self {
        Self {
            isbn13: isbn13.to_string(),
            key: key.map(str::to_string),
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBookCommandResponse {
    pub book: Value,
}

impl GetBookCommandResponse {
    pub fn new(book: Value) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let book = self.catalog_service.find_book_by_isbn(req.isbn13.as_str()).await?;
        let field = match req.key.as_deref() {
            Some(key) => BookField::try_from(key)?,
            None => BookField::All,
        };
        let value = serde_json::to_value(&book)
            .map_err(|err| CommandError::Serialization { message: err.to_string() })?;
        if field == BookField::All {
            return Ok(GetBookCommandResponse::new(value));
        }
        let projected = value.get(field.as_str()).cloned().unwrap_or(Value::Null);
        let mut map = Map::new();
        map.insert(field.to_string(), projected);
        Ok(GetBookCommandResponse::new(Value::Object(map)))
    }
}
