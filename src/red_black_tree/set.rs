use crate::comparator::{Comparator, Natural};
use crate::red_black_tree::map::{Keys, RedBlackMap};
use std::iter::FusedIterator;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that keeps its height logarithmic by
/// coloring every node red or black and restoring the coloring rules after each insertion.
///
/// # Examples
///
/// ```
/// use rb_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
/// ```
pub struct RedBlackSet<T, C = Natural> {
    map: RedBlackMap<T, (), C>,
}

impl<T> RedBlackSet<T, Natural> {
    /// Constructs a new, empty `RedBlackSet<T>` ordered by the natural order of the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            map: RedBlackMap::new(),
        }
    }
}

impl<T, C> RedBlackSet<T, C> {
    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(|left: &u32, right: &u32| right.cmp(left));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackSet {
            map: RedBlackMap::with_comparator(comparator),
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was not already present; an equal
    /// key that is already present is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        C: Comparator<T>,
    {
        self.map.insert(key, ()).is_none()
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        C: Comparator<T>,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    pub fn floor(&self, key: &T) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            keys: self.map.keys(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T>
where
    T: 'a,
{
    keys: Keys<'a, T, ()>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }
}

impl<'a, T> FusedIterator for RedBlackSetIter<'a, T> {}

impl<T, C> Default for RedBlackSet<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}
