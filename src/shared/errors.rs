use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    // Menu audit findings
    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),

    #[error("Duplicate child href {href} in section {section}")]
    DuplicateChildHref { section: String, href: String },

    #[error("Empty href for '{entry}' in section {section}")]
    EmptyHref { section: String, entry: String },

    #[error("Section {0} has neither a link nor children")]
    EmptySection(String),

    // Shell configuration
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Invalid href: {0}")]
    InvalidHref(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;
