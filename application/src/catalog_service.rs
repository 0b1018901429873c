use domain::catalog::{self, Book, Counsellor, Video};

/// Read-side filtering over the static wellness catalogs.
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Title/author substring search over the book library.
    pub fn search_books(&self, query: &str) -> Vec<&'static Book> {
        catalog::BOOKS.iter().filter(|b| b.matches(query)).collect()
    }

    /// Title/creator search, intersected with a category filter.
    /// `None` (or "All") disables the category filter.
    pub fn search_videos(&self, query: &str, category: Option<&str>) -> Vec<&'static Video> {
        let category = category.unwrap_or("All");
        catalog::VIDEOS
            .iter()
            .filter(|v| v.in_category(category) && v.matches(query))
            .collect()
    }

    /// Name/specialty search over the counsellor roster.
    pub fn search_counsellors(&self, query: &str) -> Vec<&'static Counsellor> {
        catalog::COUNSELLORS
            .iter()
            .filter(|c| c.matches(query))
            .collect()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
