pub mod web_search;

pub use self::web_search::{NoWebSearch, WebSearch};
