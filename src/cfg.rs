use std::env;

const DEFAULT_DB_URL: &str = "stream-rater.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;
const DEFAULT_SEARCH_RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
    pub search_api_token: Option<String>,
    pub search_result_limit: usize,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        if let Ok(limit) = env::var("SEARCH_RESULT_LIMIT") {
            match limit.parse() {
                Ok(limit) => {
                    cfg.search_result_limit = limit;
                }
                Err(_) => {
                    log::warn!("Ignoring invalid SEARCH_RESULT_LIMIT: {limit}");
                }
            }
        }
        match env::var("SEARCH_API_TOKEN") {
            Ok(token) => {
                cfg.search_api_token = Some(token);
            }
            Err(_) => {
                log::warn!("No search API token found");
            }
        };
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            db_connection_pool_size: DB_CONNECTION_POOL_SIZE,
            search_api_token: None,
            search_result_limit: DEFAULT_SEARCH_RESULT_LIMIT,
        }
    }
}
