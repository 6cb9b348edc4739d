use crate::error::{Result, require_present};
use serde::Serialize;

/// A named payee registered with the remote service.
///
/// Identity is the server-assigned `id`: two recipients with the same id are
/// equal even when their names differ.
#[derive(Debug, Clone, Serialize)]
pub struct Recipient {
    name: String,
    id: String,
}

impl Recipient {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let id = id.into();
        require_present(&name, "name")?;
        require_present(&id, "id")?;
        Ok(Self { name, id })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

// The backend guarantees id uniqueness.
impl PartialEq for Recipient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipient {}
