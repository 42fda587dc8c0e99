use anyhow::Result;

use sr_core::gateways::search::{SearchGateway, SearchHit};

const SUMMARY_LEN: usize = 255;

/// A web search gateway backed by the webhose.io content API.
#[derive(Debug, Clone)]
pub struct WebSearch {
    pub api_token: String,
    pub api_base_url: String,
}

impl WebSearch {
    pub fn new(api_token: String) -> Self {
        Self {
            api_token,
            api_base_url: "https://api.webhose.io".to_string(),
        }
    }

    fn api_url(&self, query: &str) -> String {
        // TODO: use url::Url
        format!(
            "{}/filterWebContent?token={}&format=json&sort=relevancy&q={}",
            self.api_base_url, self.api_token, query
        )
    }
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    posts: Vec<Post>,
}

#[derive(Debug, serde::Deserialize)]
struct Post {
    title: String,
    url: String,
    text: String,
}

#[derive(Debug, serde::Deserialize, thiserror::Error)]
#[error("{message}")]
struct JsonError {
    pub message: String,
}

impl From<Post> for SearchHit {
    fn from(from: Post) -> Self {
        let Post { title, url, text } = from;
        let summary = text.chars().take(SUMMARY_LEN).collect();
        Self {
            title,
            url,
            summary,
        }
    }
}

impl SearchGateway for WebSearch {
    fn run_query(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let client = reqwest::blocking::Client::new();
        let response = client.get(self.api_url(query)).send()?;
        if !response.status().is_success() {
            let json_error: JsonError = response.json()?;
            return Err(json_error.into());
        }
        let response: SearchResponse = response.json()?;
        Ok(response
            .posts
            .into_iter()
            .take(limit)
            .map(Into::into)
            .collect())
    }
}

/// Fallback gateway if no search API token has been configured.
#[derive(Debug, Clone, Default)]
pub struct NoWebSearch;

impl SearchGateway for NoWebSearch {
    fn run_query(&self, query: &str, _limit: usize) -> Result<Vec<SearchHit>> {
        log::warn!("Cannot search the web for {query:?}: no search API token configured");
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_are_truncated() {
        let post = Post {
            title: "title".into(),
            url: "https://example.com".into(),
            text: "x".repeat(SUMMARY_LEN * 2),
        };
        let hit = SearchHit::from(post);
        assert_eq!(hit.summary.len(), SUMMARY_LEN);
    }

    #[test]
    fn no_search_returns_empty_results() {
        let hits = NoWebSearch.run_query("anything", 10).unwrap();
        assert!(hits.is_empty());
    }
}
