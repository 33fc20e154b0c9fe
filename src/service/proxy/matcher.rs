//! Persona prefix matching.

use crate::{error::AppError, model::persona::Persona, service::proxy::store::PersonaStore};

/// Finds which of an author's personas, if any, a message was written as.
pub struct PersonaMatcher<'a> {
    store: &'a dyn PersonaStore,
}

impl<'a> PersonaMatcher<'a> {
    pub fn new(store: &'a dyn PersonaStore) -> Self {
        Self { store }
    }

    /// Returns the author's persona whose prefix starts `text`.
    ///
    /// Personas are checked in store order (newest first) and the first hit wins,
    /// so overlapping prefixes resolve to the most recently created persona.
    pub async fn find_match(
        &self,
        author_id: u64,
        guild_id: u64,
        text: &str,
    ) -> Result<Option<Persona>, AppError> {
        let personas = self.store.list(author_id, guild_id).await?;

        Ok(match_prefix(personas, text))
    }
}

/// Returns the first persona whose prefix is a literal, case-sensitive prefix of `text`.
pub fn match_prefix(personas: Vec<Persona>, text: &str) -> Option<Persona> {
    personas
        .into_iter()
        .find(|persona| text.starts_with(persona.prefix.as_str()))
}
