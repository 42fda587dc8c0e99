/// A single hit returned by the external search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub summary: String,
}

/// External full-text web search, e.g. for finding streams related
/// to a category.
pub trait SearchGateway {
    fn run_query(&self, query: &str, limit: usize) -> anyhow::Result<Vec<SearchHit>>;
}
