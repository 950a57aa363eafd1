//! Persistent list used for every repeated slot in the syntax tree.

use std::{fmt, ops::Deref, sync::Arc};

/// An immutable, shareable list of syntax elements.
///
/// Cloning is O(1). Every "add" returns a new list and leaves the receiver
/// untouched, so nodes holding the old list keep seeing the old contents.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SyntaxList<T>(Arc<[T]>);

impl<T> SyntaxList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Whether two lists share the same backing storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> SyntaxList<T> {
    /// Return a new list with `item` appended.
    pub fn add(&self, item: T) -> Self {
        self.add_range(std::iter::once(item))
    }

    /// Return a new list with every element of `items` appended, in order.
    pub fn add_range(&self, items: impl IntoIterator<Item = T>) -> Self {
        self.0.iter().cloned().chain(items).collect()
    }
}

impl<T> Default for SyntaxList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for SyntaxList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> FromIterator<T> for SyntaxList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect::<Vec<_>>().into())
    }
}

impl<T> From<Vec<T>> for SyntaxList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items.into())
    }
}

impl<'a, T> IntoIterator for &'a SyntaxList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SyntaxList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_leaves_original_untouched() {
        let first: SyntaxList<i32> = vec![1, 2].into();
        let second = first.add(3);
        assert_eq!(first.as_slice(), &[1, 2]);
        assert_eq!(second.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_add_range_preserves_order() {
        let list = SyntaxList::new().add_range(["a", "b"]).add_range(["c"]);
        assert_eq!(list.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn test_clone_shares_storage() {
        let list: SyntaxList<i32> = vec![1].into();
        let copy = list.clone();
        assert!(list.ptr_eq(&copy));
        assert!(!list.ptr_eq(&list.add(2)));
    }

    #[test]
    fn test_default_is_empty() {
        let list: SyntaxList<String> = SyntaxList::default();
        assert!(list.is_empty());
        assert_eq!(format!("{:?}", list), "[]");
    }
}
