/// Reasons a milestone table cannot be used as a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    /// `required_coins` is not strictly above the previous entry's.
    NotAscending { id: String },
    DuplicateId { id: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "milestone catalog is empty"),
            Self::NotAscending { id } => {
                write!(f, "milestone {id} does not raise the coin threshold")
            }
            Self::DuplicateId { id } => write!(f, "milestone id {id} appears more than once"),
        }
    }
}

impl std::error::Error for CatalogError {}
