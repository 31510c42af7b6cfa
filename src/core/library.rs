use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CatalogError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
    // The backing document could not be read or written.
    Io {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> CatalogError {
        CatalogError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn io(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Io { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::io(
            format!("catalog document io {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Io { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A specialized Result type for the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

// Fields of a book record that can be projected with the `key` query parameter.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BookField {
    All,
    Isbn13,
    Isbn10,
    Title,
    Subtitle,
    Author,
    Category,
    Thumbnail,
    Description,
    PublishedYear,
    NumPages,
    RatingsCount,
    AverageRating,
}

impl BookField {
    pub const VALUES: [BookField; 13] = [
        BookField::All,
        BookField::Isbn13,
        BookField::Isbn10,
        BookField::Title,
        BookField::Subtitle,
        BookField::Author,
        BookField::Category,
        BookField::Thumbnail,
        BookField::Description,
        BookField::PublishedYear,
        BookField::NumPages,
        BookField::RatingsCount,
        BookField::AverageRating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookField::All => "all",
            BookField::Isbn13 => "isbn13",
            BookField::Isbn10 => "isbn10",
            BookField::Title => "title",
            BookField::Subtitle => "subtitle",
            BookField::Author => "author",
            BookField::Category => "category",
            BookField::Thumbnail => "thumbnail",
            BookField::Description => "description",
            BookField::PublishedYear => "published_year",
            BookField::NumPages => "num_pages",
            BookField::RatingsCount => "ratings_count",
            BookField::AverageRating => "average_rating",
        }
    }

    pub fn valid_keys() -> Vec<&'static str> {
        BookField::VALUES.iter().map(BookField::as_str).collect()
    }
}

impl TryFrom<&str> for BookField {
    type Error = CatalogError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        BookField::VALUES.iter().find(|f| f.as_str() == s).copied().ok_or_else(|| {
            CatalogError::validation(
                format!("Invalid key '{}', valid keys are {:?}", s, BookField::valid_keys()).as_str(),
                Some("key".to_string()))
        })
    }
}

impl Display for BookField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Fields a search query can be matched against.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchKey {
    Title,
    Author,
    Description,
    PublishedYear,
    Category,
}

impl SearchKey {
    pub const VALUES: [SearchKey; 5] = [
        SearchKey::Title,
        SearchKey::Author,
        SearchKey::Description,
        SearchKey::PublishedYear,
        SearchKey::Category,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKey::Title => "title",
            SearchKey::Author => "author",
            SearchKey::Description => "description",
            SearchKey::PublishedYear => "published_year",
            SearchKey::Category => "category",
        }
    }

    pub fn valid_keys() -> Vec<&'static str> {
        SearchKey::VALUES.iter().map(SearchKey::as_str).collect()
    }
}

impl TryFrom<&str> for SearchKey {
    type Error = CatalogError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        SearchKey::VALUES.iter().find(|k| k.as_str() == s).copied().ok_or_else(|| {
            CatalogError::validation(
                format!("Invalid search key '{}', valid keys are {:?}", s, SearchKey::valid_keys()).as_str(),
                Some("search_key".to_string()))
        })
    }
}

impl Display for SearchKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Allowed values for the `items` result cap of a search.
pub const VALID_ITEMS: [usize; 7] = [1, 5, 10, 20, 50, 100, 500];

pub fn parse_items(s: &str) -> CatalogResult<usize> {
    s.trim().parse::<usize>().ok()
        .filter(|n| VALID_ITEMS.contains(n))
        .ok_or_else(|| CatalogError::validation(
            format!("Invalid items '{}', books can only be listed in counts of {:?}", s, VALID_ITEMS).as_str(),
            Some("items".to_string())))
}
