use crate::core::domain::Identifiable;
use crate::core::library::SearchKey;

pub mod model;
pub mod search;

pub trait Book: Identifiable {
    // stringified value of the field a search runs against
    fn text_for(&self, key: SearchKey) -> String;
}
