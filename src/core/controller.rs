use std::sync::Arc;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub type ServerError = (StatusCode, Json<ErrorResponse>);

pub fn server_error(status: StatusCode, detail: &str) -> ServerError {
    (status, Json(ErrorResponse { detail: detail.to_string() }))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    warn!("rejected request body: {}", err);
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

pub fn json_rejection_to_server_error(rejection: JsonRejection) -> ServerError {
    warn!("rejected request body: {}", rejection.body_text());
    server_error(rejection.status(), rejection.body_text().as_str())
}

pub fn query_rejection_to_server_error(rejection: QueryRejection) -> ServerError {
    warn!("rejected query string: {}", rejection.body_text());
    server_error(rejection.status(), rejection.body_text().as_str())
}

// The fetch and edit routes report an unknown isbn as a bad request rather than 404.
pub fn not_found_as_bad_request(err: CommandError) -> ServerError {
    match err {
        CommandError::NotFound { message } => {
            warn!("{}", message);
            server_error(StatusCode::BAD_REQUEST, message.as_str())
        }
        other => ServerError::from(other),
    }
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::DuplicateKey { .. } => StatusCode::BAD_REQUEST,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
        };
        if status.is_server_error() {
            error!("command failed {:?}", err);
        } else {
            warn!("{}", err.message());
        }
        server_error(status, err.message())
    }
}
