// Serde helper for nullable patch fields: a missing field stays `None`,
// an explicit `null` becomes `Some(None)` and a value becomes `Some(Some(v))`.
// Use together with `#[serde(default)]`.
pub mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
        where T: Deserialize<'de>,
              D: Deserializer<'de> {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
