//! The per-identity list of item names wanted for automatic purchase.

/// Ordered list of wanted item names.
///
/// Insertion order is preserved for display and for the durable round-trip;
/// membership is what reconciliation cares about. Duplicates are not
/// rejected, and removal always takes the first occurrence only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    names: Vec<String>,
}

impl Wishlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append a wanted name. Blank names are ignored; the durable format is
    /// one name per line, so an empty entry would not survive a round-trip.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.names.push(name);
        }
    }

    /// Remove the first occurrence of `name`. Returns whether anything was
    /// removed; a remaining duplicate stays eligible for the next match.
    pub fn remove_first(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for Wishlist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wishlist(names: &[&str]) -> Wishlist {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_contains() {
        let list = wishlist(&["Widget", "Gadget"]);
        assert!(list.contains("Widget"));
        assert!(!list.contains("Gizmo"));
    }

    #[test]
    fn test_push_preserves_order() {
        let mut list = Wishlist::new();
        list.push("Widget");
        list.push("Gadget");
        assert_eq!(list.names(), ["Widget", "Gadget"]);
    }

    #[test]
    fn test_push_ignores_empty_name() {
        let mut list = Wishlist::new();
        list.push("");
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_first_takes_one_occurrence() {
        let mut list = wishlist(&["Widget", "Gadget", "Widget"]);
        assert!(list.remove_first("Widget"));
        assert_eq!(list.names(), ["Gadget", "Widget"]);
    }

    #[test]
    fn test_remove_first_missing_is_noop() {
        let mut list = wishlist(&["Widget"]);
        assert!(!list.remove_first("Gizmo"));
        assert_eq!(list.names(), ["Widget"]);
    }
}
