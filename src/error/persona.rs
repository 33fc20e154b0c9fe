use thiserror::Error;

/// Rejections raised by the persona store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PersonaError {
    /// The owner already has a persona with this name in the guild.
    #[error("A persona named '{name}' already exists")]
    AlreadyExists {
        /// The conflicting persona name
        name: String,
    },

    /// A required field is empty after trimming.
    ///
    /// Empty prefixes would match every message the owner sends.
    #[error("Persona {field} cannot be empty")]
    EmptyField {
        /// Name of the rejected field
        field: String,
    },

    /// No persona with this name is owned by the user in the guild.
    #[error("Persona '{name}' not found")]
    NotFound {
        /// The requested persona name
        name: String,
    },
}
