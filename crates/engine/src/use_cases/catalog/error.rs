use realmkeeper_domain::DomainError;

/// Errors from place catalog administration
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No place named '{0}'")]
    NotFound(String),

    #[error("A place named '{0}' already exists")]
    NameTaken(String),

    #[error("No spawn point near that position in '{place}'")]
    NoSpawnNearby { place: String },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
