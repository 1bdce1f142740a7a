//! Static configuration for a data source.

/// The non-callback part of a data source's configuration.
///
/// # Example
///
/// ```
/// use array_data_source::DataSourceConfig;
///
/// let config = DataSourceConfig::new()
///     .with_default_cell_identifier("Cell")
///     .with_section_header_titles(vec!["Recent".into()]);
///
/// assert_eq!(config.default_cell_identifier(), Some("Cell"));
/// assert_eq!(config.header_title(0), Some("Recent"));
/// assert_eq!(config.header_title(1), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DataSourceConfig {
    /// Identifier used for every cell unless a cell identifier hook overrides it.
    pub default_cell_identifier: Option<String>,
    /// Header titles aligned by index to sections. Need not match the section count.
    pub section_header_titles: Option<Vec<String>>,
}

impl DataSourceConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default cell identifier.
    pub fn with_default_cell_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.default_cell_identifier = Some(identifier.into());
        self
    }

    /// Sets the section header titles.
    pub fn with_section_header_titles(mut self, titles: Vec<String>) -> Self {
        self.section_header_titles = Some(titles);
        self
    }

    /// Returns the default cell identifier, if set.
    pub fn default_cell_identifier(&self) -> Option<&str> {
        self.default_cell_identifier.as_deref()
    }

    /// Returns the header title for `section`.
    ///
    /// Returns `None` when no titles are configured or `section` is past the end.
    pub fn header_title(&self, section: usize) -> Option<&str> {
        self.section_header_titles
            .as_ref()?
            .get(section)
            .map(String::as_str)
    }
}
