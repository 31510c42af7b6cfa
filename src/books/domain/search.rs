use crate::books::domain::Book;
use crate::core::library::{CatalogResult, parse_items, SearchKey};

// SearchCriteria is a validated search request: a case-insensitive substring
// match on one field, capped at `items` results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub query: String,
    pub key: SearchKey,
    pub items: usize,
}

impl SearchCriteria {
    pub fn new(query: &str, key: SearchKey, items: usize) -> Self {
        Self {
            query: query.to_string(),
            key,
            items,
        }
    }

    pub fn parse(query: &str, search_key: &str, items: &str) -> CatalogResult<Self> {
        let key = SearchKey::try_from(search_key)?;
        let items = parse_items(items)?;
        Ok(Self::new(query, key, items))
    }

    pub fn matches<B: Book>(&self, book: &B) -> bool {
        book.text_for(self.key).to_lowercase().contains(self.query.to_lowercase().as_str())
    }

    // scans in iteration order and stops once `items` matches are collected
    pub fn collect<'a, B, I>(&self, books: I) -> Vec<B>
        where B: Book + Clone + 'a,
              I: IntoIterator<Item=&'a B> {
        books.into_iter()
            .filter(|b| self.matches(*b))
            .take(self.items)
            .cloned()
            .collect()
    }
}
