use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A listing that must not be empty had nothing to show.
    #[error("No {entity} available")]
    NoneAvailable { entity: &'static str },

    /// A create/update/delete could not be carried out.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}
