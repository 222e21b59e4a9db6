//! Author entity.

use crate::AuthorId;
use serde::{Deserialize, Serialize};

/// An author document.
///
/// Authors live independently of the books that reference them: deleting an
/// author referenced by a book leaves a dangling reference on the book side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique identifier.
    pub id: AuthorId,

    /// Author name. Required, non-empty.
    pub name: String,
}

impl Author {
    /// Creates a new author with a fresh ID.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: AuthorId::new(),
            name,
        }
    }

    /// Replaces the author's name.
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_author_gets_fresh_id() {
        let a = Author::new("Machado de Assis".to_string());
        let b = Author::new("Machado de Assis".to_string());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Machado de Assis");
    }

    #[test]
    fn test_rename() {
        let mut author = Author::new("Machado".to_string());
        author.rename("Machado de Assis".to_string());
        assert_eq!(author.name, "Machado de Assis");
    }
}
