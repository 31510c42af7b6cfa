use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{CatalogError, CatalogResult};

pub const ISBN13_LEN: usize = 13;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn13: String,
    pub isbn10: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    pub thumbnail: String,
    pub description: String,
    pub published_year: i32,
    pub num_pages: u32,
    #[serde(default)]
    pub ratings_count: Option<u32>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl BookDto {
    pub fn validate(&self, current_year: i32) -> CatalogResult<()> {
        validate_isbn13(self.isbn13.as_str())?;
        validate_published_year(self.published_year, current_year)
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn13.to_string()
    }
}

// BookPatch carries the fields of a partial update. A field that is absent from the
// request stays `None` and leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookPatch {
    pub isbn13: Option<String>,
    pub isbn10: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::patch::double_option::deserialize")]
    pub subtitle: Option<Option<String>>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::patch::double_option::deserialize")]
    pub category: Option<Option<String>>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub num_pages: Option<u32>,
    #[serde(default, deserialize_with = "crate::utils::patch::double_option::deserialize")]
    pub ratings_count: Option<Option<u32>>,
    #[serde(default, deserialize_with = "crate::utils::patch::double_option::deserialize")]
    pub average_rating: Option<Option<f64>>,
}

impl BookPatch {
    pub fn validate(&self, isbn13: &str, current_year: i32) -> CatalogResult<()> {
        if let Some(other) = &self.isbn13 {
            if other != isbn13 {
                return Err(CatalogError::validation(
                    format!("isbn13 cannot be changed from {} to {}", isbn13, other).as_str(),
                    Some("isbn13".to_string())));
            }
        }
        if let Some(year) = self.published_year {
            validate_published_year(year, current_year)?;
        }
        Ok(())
    }
}

pub fn validate_isbn13(isbn13: &str) -> CatalogResult<()> {
    if isbn13.chars().count() != ISBN13_LEN {
        return Err(CatalogError::validation(
            format!("Invalid ISBN {} (an ISBN-13 must be exactly {} characters)", isbn13, ISBN13_LEN).as_str(),
            Some("isbn13".to_string())));
    }
    Ok(())
}

pub fn validate_published_year(year: i32, current_year: i32) -> CatalogResult<()> {
    if year <= 0 || year > current_year {
        return Err(CatalogError::validation(
            format!("Invalid published_year {}, it must be between 1 and {}", year, current_year).as_str(),
            Some("published_year".to_string())));
    }
    Ok(())
}
