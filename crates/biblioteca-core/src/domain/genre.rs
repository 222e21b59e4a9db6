//! Genre entity.

use crate::GenreId;
use serde::{Deserialize, Serialize};

/// A genre document.
///
/// Same lifecycle as [`crate::Author`]: created and deleted independently of
/// the books that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Unique identifier.
    pub id: GenreId,

    /// Genre name. Required, non-empty.
    pub name: String,
}

impl Genre {
    /// Creates a new genre with a fresh ID.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: GenreId::new(),
            name,
        }
    }

    /// Replaces the genre's name.
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_genre_gets_fresh_id() {
        let a = Genre::new("Romance".to_string());
        let b = Genre::new("Romance".to_string());
        assert_ne!(a.id, b.id);
    }
}
