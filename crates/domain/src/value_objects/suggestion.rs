//! Address suggestion returned by an autocomplete provider

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate address identified by an opaque provider-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Opaque id, unique within one result set
    pub id: String,
    /// Human-readable address shown to the user
    pub label: String,
}

impl Suggestion {
    /// Create a new suggestion
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_label() {
        let s = Suggestion::new("ChIJ0WGkg4FEzpQRrlsz_whLqZs", "Avenida Paulista, São Paulo");
        assert_eq!(s.to_string(), "Avenida Paulista, São Paulo");
    }
}
