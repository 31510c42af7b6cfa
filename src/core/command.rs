use async_trait::async_trait;
use crate::core::library::CatalogError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::DuplicateKey { message } => { message }
            CommandError::NotFound { message } => { message }
            CommandError::Storage { message, .. } => { message }
            CommandError::Serialization { message } => { message }
            CommandError::Validation { message, .. } => { message }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        match other {
            CatalogError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::Io { message, reason_code } => {
                CommandError::Storage { message, reason_code }
            }
            CatalogError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CatalogError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}
