use chrono::{Datelike, Utc};

// current calendar year in UTC, the upper bound for published_year
pub fn current_year() -> i32 {
    Utc::now().year()
}
