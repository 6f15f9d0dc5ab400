#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog {0} has no categories")]
    Empty(String),
    #[error("catalog {0} contains a category with a blank id")]
    BlankId(String),
    #[error("duplicate category id: {0}")]
    DuplicateId(String),
}

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("invalid catalog {path}: {reason}")]
    InvalidCatalog { path: String, reason: String },
    #[error("invalid settings {path}: {reason}")]
    InvalidSettings { path: String, reason: String },
}

impl ProfileError {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileError::UnknownSection(_) => "UNKNOWN_SECTION",
            ProfileError::InvalidCatalog { .. } => "INVALID_CATALOG",
            ProfileError::InvalidSettings { .. } => "INVALID_SETTINGS",
        }
    }
}

/// Stable error code for the JSON error envelope.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<ProfileError>() {
        return e.code();
    }
    if err.downcast_ref::<CatalogError>().is_some() {
        return "INVALID_CATALOG";
    }
    "INTERNAL"
}
