use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookPatch;
use crate::core::domain::Identifiable;
use crate::core::library::SearchKey;

// BookEntity is the stored form of a catalog record. The catalog document is keyed
// by isbn13, so a record read back from disk takes its isbn13 from that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(default)]
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

impl BookEntity {
    // overwrites the fields supplied by the patch, everything else is left alone
    pub fn apply(&mut self, patch: &BookPatch) {
        if let Some(isbn10) = &patch.isbn10 {
            self.isbn10 = isbn10.clone();
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(subtitle) = &patch.subtitle {
            self.subtitle = subtitle.clone();
        }
        if let Some(author) = &patch.author {
            self.author = author.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(thumbnail) = &patch.thumbnail {
            self.thumbnail = thumbnail.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(published_year) = patch.published_year {
            self.published_year = published_year;
        }
        if let Some(num_pages) = patch.num_pages {
            self.num_pages = num_pages;
        }
        if let Some(ratings_count) = patch.ratings_count {
            self.ratings_count = ratings_count;
        }
        if let Some(average_rating) = patch.average_rating {
            self.average_rating = average_rating;
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn13.to_string()
    }
}

impl Book for BookEntity {
    fn text_for(&self, key: SearchKey) -> String {
        match key {
            SearchKey::Title => self.title.to_string(),
            SearchKey::Author => self.author.to_string(),
            SearchKey::Description => self.description.to_string(),
            SearchKey::PublishedYear => self.published_year.to_string(),
            SearchKey::Category => self.category.clone().unwrap_or_default(),
        }
    }
}
