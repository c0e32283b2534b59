use serde::Deserialize;

/// Embedding options a page passes to a data table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub enable_search: bool,
    pub search_placeholder: String,
    pub enable_sorting: bool,
    pub enable_pagination: bool,
    /// Message shown in the placeholder row when no rows match.
    pub no_data_message: String,
    pub default_page_size: usize,
    /// Choices offered by the rows-per-page selector.
    pub page_size_options: Vec<usize>,
    /// Show a loading indicator above the table.
    pub is_loading: bool,
}

impl TableConfig {
    pub const DEFAULT_PAGE_SIZE: usize = 10;
    pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

    pub fn with_no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = message.into();
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        if !self.page_size_options.contains(&page_size) {
            self.page_size_options.push(page_size);
            self.page_size_options.sort_unstable();
        }
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            enable_search: true,
            search_placeholder: "Search...".to_owned(),
            enable_sorting: true,
            enable_pagination: true,
            no_data_message: "No data available".to_owned(),
            default_page_size: Self::DEFAULT_PAGE_SIZE,
            page_size_options: Self::DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            is_loading: false,
        }
    }
}
