use std::net::SocketAddr;
use std::path::PathBuf;
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use crate::core::library::{CatalogError, CatalogResult, SearchKey};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// BMS_DATA_FILE, BMS_ADDR, BMS_DEFAULT_ITEMS ... override the matching fields.
pub const ENV_PREFIX: &str = "BMS_";
pub const LOG_LEVEL_ENV: &str = "BMS_LOG_LEVEL";

const DEFAULT_DATA_FILE: &str = "books_data.json";

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub addr: SocketAddr,
    pub default_items: usize,
    pub default_search_key: String,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: PathBuf::from(data_file),
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            default_items: 10,
            default_search_key: SearchKey::Title.to_string(),
        }
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Configuration::new(DEFAULT_DATA_FILE)))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_env() -> CatalogResult<Self> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> CatalogResult<Self> {
        figment.extract().map_err(|err| CatalogError::validation(
            format!("invalid configuration: {}", err).as_str(), None))
    }
}
