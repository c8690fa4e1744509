use crate::node::Node;
use crate::tree;
use crate::{Error, Result};
use std::borrow::Borrow;
use std::iter::FromIterator;

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed items are quick to access again. Insertions and successful lookups "splay" the
/// accessed item to the root of the tree in a single top-down pass.
///
/// # Examples
///
/// ```
/// use splay_collections::SplaySet;
///
/// let mut set = SplaySet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert!(set.contains(&0));
/// assert!(!set.contains(&1));
///
/// assert_eq!(set.min(), Ok(&0));
/// assert_eq!(set.max(), Ok(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct SplaySet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet { tree: None, len: 0 }
    }

    /// Inserts a key into the set and splays it to the root. Insertion always succeeds: an equal
    /// key already in the set is kept, so inserting a duplicate grows the set by one. Lookup and
    /// removal only ever operate on one arbitrary occurrence of a duplicated key, so unique keys
    /// are the supported usage.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T)
    where
        T: Ord,
    {
        tree::insert(&mut self.tree, key);
        self.len += 1;
    }

    /// Checks if a key exists in the set. A successful lookup splays the found key to the root,
    /// which is why `contains` takes a mutable reference; a failed lookup leaves the tree
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::contains(&mut self.tree, key)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None` and leave the set unchanged. Removal splices the node
    /// out of the tree without splaying.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::remove(&mut self.tree, key).map(|key| {
            self.len -= 1;
            key
        })
    }

    /// Returns the minimum key of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{Error, SplaySet};
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.min(), Err(Error::EmptyCollection));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T>
    where
        T: Ord,
    {
        tree::min(&self.tree).ok_or(Error::EmptyCollection)
    }

    /// Returns the maximum key of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{Error, SplaySet};
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.max(), Err(Error::EmptyCollection));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T>
    where
        T: Ord,
    {
        tree::max(&self.tree).ok_or(Error::EmptyCollection)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator will yield keys in ascending order using
    /// in-order traversal, keeping only the leftward spine of the unvisited part of the tree on
    /// an explicit stack. The iterator borrows the set, so the tree cannot be mutated while it
    /// is in use.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplaySetIter<'_, T> {
        SplaySetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for SplaySet<T> {
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T>
where
    T: 'a,
{
    type IntoIter = SplaySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct SplaySetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct SplaySetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for SplaySetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::SplaySet;
    use crate::Error;

    #[test]
    fn test_len_empty() {
        let set: SplaySet<u32> = SplaySet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: SplaySet<u32> = SplaySet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: SplaySet<u32> = SplaySet::new();
        assert_eq!(set.min(), Err(Error::EmptyCollection));
        assert_eq!(set.max(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_insert() {
        let mut set = SplaySet::new();
        set.insert(5);
        set.insert(1);
        set.insert(2);

        assert_eq!(set.len(), 3);
        assert!(set.contains(&5));
        assert!(!set.contains(&3));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = SplaySet::new();
        set.insert(1);
        set.insert(1);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_contains_repeated() {
        let mut set = SplaySet::new();
        for key in 0..10 {
            set.insert(key);
        }

        for _ in 0..3 {
            assert!(set.contains(&7));
            assert!(!set.contains(&42));
        }

        assert_eq!(set.len(), 10);
        assert_eq!(
            set.iter().cloned().collect::<Vec<i32>>(),
            (0..10).collect::<Vec<i32>>(),
        );
    }

    #[test]
    fn test_min_max() {
        let mut set = SplaySet::new();
        set.insert(5);
        set.insert(1);
        set.insert(2);

        assert_eq!(set.min(), Ok(&1));
        assert_eq!(set.max(), Ok(&5));
    }

    #[test]
    fn test_remove() {
        let mut set = SplaySet::new();
        set.insert(5);
        set.insert(1);
        set.insert(2);

        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&2, &5]);
    }

    #[test]
    fn test_remove_absent() {
        let mut set = SplaySet::new();
        set.insert(1);
        set.insert(2);

        assert_eq!(set.remove(&7), None);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    }

    #[test]
    fn test_remove_empty() {
        let mut set: SplaySet<u32> = SplaySet::new();
        assert_eq!(set.remove(&7), None);
        assert_eq!(set.len(), 0);
        assert_eq!(set.min(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_remove_root_two_children() {
        let mut set = SplaySet::new();
        set.insert(1);
        set.insert(3);
        set.insert(2);

        assert_eq!(set.remove(&2), Some(2));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3]);
    }

    #[test]
    fn test_remove_inner_two_children() {
        let mut set = SplaySet::new();
        for key in &[5, 1, 2, 10, 3, -2] {
            set.insert(*key);
        }

        assert_eq!(set.remove(&5), Some(5));
        assert_eq!(set.len(), 5);
        assert_eq!(
            set.iter().collect::<Vec<&i32>>(),
            vec![&-2, &1, &2, &3, &10],
        );
    }

    #[test]
    fn test_remove_all() {
        let mut set = SplaySet::new();
        for key in &[5, 9, 1, 7, 3, 8, 2, 6, 4, 10] {
            set.insert(*key);
        }

        for key in &[3, 10, 1, 6, 9, 2, 8, 5, 4, 7] {
            assert_eq!(set.remove(key), Some(*key));
        }

        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.iter().next(), None);
        assert_eq!(set.min(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_clear() {
        let mut set = SplaySet::new();
        set.insert(1);
        set.insert(2);
        set.clear();

        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn test_iter() {
        let mut set = SplaySet::new();
        for key in &[5, 1, 2, 10, 3, -2] {
            set.insert(*key);
        }

        assert_eq!(
            set.iter().collect::<Vec<&i32>>(),
            vec![&-2, &1, &2, &3, &5, &10],
        );
    }

    #[test]
    fn test_into_iter() {
        let mut set = SplaySet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_from_iter() {
        let set = vec![3, 1, 2].into_iter().collect::<SplaySet<u32>>();
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    }
}
