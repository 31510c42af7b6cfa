use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use crate::books::dto::BookPatch;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_rejection_to_server_error, json_to_server_error, not_found_as_bad_request,
                               query_rejection_to_server_error, ServerError};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_routes))
        .route("/data", get(list_books))
        .route("/new", post(add_book))
        .route("/search/:query", get(search_books))
        .route("/edit/:isbn13", put(update_book))
        .route("/delete/:isbn13", delete(remove_book))
        .route("/:isbn", get(find_book_by_isbn))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct BookKeyParams {
    key: Option<String>,
}

pub async fn list_routes() -> Json<Value> {
    Json(json!({
        "/": "Lists the available routes",
        "/data": "Returns the whole catalog keyed by isbn13",
        "/{isbn13}": "Returns one book, ?key=<field> returns a single field (default all)",
        "/search/{query}": "Searches books, ?search_key=title|author|description|published_year|category&items=1|5|10|20|50|100|500",
        "/new": "POST a complete book record to add it",
        "/edit/{isbn13}": "PUT a partial book record to update the supplied fields",
        "/delete/{isbn13}": "DELETE a book",
    }))
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    params: Result<Query<BookKeyParams>, QueryRejection>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let Query(params) = params.map_err(query_rejection_to_server_error)?;
    let req = GetBookCommandRequest { isbn13: isbn, key: params.key };
    let res = GetBookCommand::new(state.catalog).execute(req).await.map_err(not_found_as_bad_request)?;
    Ok(Json(res))
}

pub async fn search_books(
    State(state): State<AppState>,
    Path(query): Path<String>,
    req: Result<Query<SearchBooksCommandRequest>, QueryRejection>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let Query(mut req) = req.map_err(query_rejection_to_server_error)?;
    req.query = query;
    let res = SearchBooksCommand::new(state.catalog, &state.config).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let Json(json) = json.map_err(json_rejection_to_server_error)?;
    let req: AddBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    info!("adding book {}", req.book.isbn13);
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn13): Path<String>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let Json(json) = json.map_err(json_rejection_to_server_error)?;
    let patch: BookPatch = serde_json::from_value(json).map_err(json_to_server_error)?;
    info!("updating book {}", isbn13);
    let req = UpdateBookCommandRequest { isbn13, patch };
    let res = UpdateBookCommand::new(state.catalog).execute(req).await.map_err(not_found_as_bad_request)?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(isbn13): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    info!("removing book {}", isbn13);
    let req = RemoveBookCommandRequest { isbn13 };
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}
