use crate::comparator::{Comparator, Natural};
use crate::red_black_tree::node::Link;
use crate::red_black_tree::tree::Tree;
use crate::red_black_tree::{Error, Result, DEFAULT_CHUNK_SIZE};
use log::debug;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree in which every node is colored red or
/// black. The root is black, no red node has a red child and every path from a node to a missing
/// child passes through the same number of black nodes, so the height of the tree never exceeds
/// `2 * log2(n + 1)`.
///
/// Keys are ordered by a `Comparator` supplied at construction; `RedBlackMap::new` uses the
/// natural order of the keys.
///
/// # Examples
///
/// ```
/// use rb_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.insert(0, 5), Some(2));
/// ```
pub struct RedBlackMap<K, V, C = Natural> {
    tree: Tree<K, V>,
    comparator: C,
    len: usize,
}

impl<K, V> RedBlackMap<K, V, Natural> {
    /// Constructs a new, empty `RedBlackMap<K, V>` ordered by the natural order of the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> RedBlackMap<K, V, C> {
    /// Constructs a new, empty `RedBlackMap<K, V, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_comparator(|left: &u32, right: &u32| right.cmp(left));
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.min(), Some(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_chunk_size(comparator, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackMap<K, V, C>` ordered by `comparator` that allocates
    /// `chunk_size` nodes at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::comparator::Natural;
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::with_comparator_and_chunk_size(Natural, 16);
    /// ```
    pub fn with_comparator_and_chunk_size(comparator: C, chunk_size: usize) -> Self {
        RedBlackMap {
            tree: Tree::new(chunk_size),
            comparator,
            len: 0,
        }
    }

    /// Returns the comparator that orders the keys of the map.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced and the old value is returned. The stored key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        C: Comparator<K>,
    {
        let RedBlackMap {
            ref mut tree,
            ref comparator,
            ref mut len,
        } = self;
        let ret = tree.insert(comparator, key, value);
        if ret.is_none() {
            *len += 1;
        }
        ret
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool
    where
        C: Comparator<K>,
    {
        self.tree.find(&self.comparator, key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &K) -> Option<&V>
    where
        C: Comparator<K>,
    {
        self.tree
            .find(&self.comparator, key)
            .map(|handle| &self.tree.node(handle).value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        C: Comparator<K>,
    {
        let RedBlackMap {
            ref mut tree,
            ref comparator,
            ..
        } = self;
        match tree.find(comparator, key) {
            Some(handle) => Some(&mut tree.node_mut(handle).value),
            None => None,
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing red black map with {} entries", self.len);
        self.tree.clear();
        self.len = 0;
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &K) -> Option<&K>
    where
        C: Comparator<K>,
    {
        self.key_of(self.tree.floor(&self.comparator, key))
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &K) -> Option<&K>
    where
        C: Comparator<K>,
    {
        self.key_of(self.tree.ceil(&self.comparator, key))
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        self.key_of(self.tree.first())
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&K> {
        self.key_of(self.tree.last())
    }

    fn key_of(&self, link: Link) -> Option<&K> {
        link.map(|handle| &self.tree.node(handle).key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: &self.tree,
            next: self.tree.first(),
        }
    }

    /// Returns an iterator over the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 1);
    /// map.insert(1, 2);
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &3]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { iter: self.iter() }
    }

    /// Returns an iterator over the values of the map, ordered by their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 1);
    /// map.insert(1, 2);
    /// assert_eq!(map.values().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { iter: self.iter() }
    }

    /// Returns a set view of the keys of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 0);
    /// map.insert(1, 0);
    ///
    /// let keys = map.key_set();
    /// assert_eq!(keys.len(), 2);
    /// assert!(keys.contains(&1));
    /// assert_eq!(keys.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn key_set(&self) -> KeySet<'_, K, V, C> {
        KeySet { map: self }
    }
}

impl<'a, K, V, C> IntoIterator for &'a RedBlackMap<K, V, C>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackMap<K, V, C>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references. It
/// holds only the position of the next node and walks to the successor on every step.
pub struct Iter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    tree: &'a Tree<K, V>,
    next: Link,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.next?;
        self.next = tree.successor(handle);
        let node = tree.node(handle);
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// An iterator over the keys of a `RedBlackMap<K, V, C>` in ascending order.
///
/// Besides `Iterator`, `Keys` supports an explicit protocol that reports misuse as an `Error`:
/// `has_next` checks for a remaining key, `next_key` fails once the keys are exhausted and
/// `remove` always fails since keys cannot be removed through the view.
///
/// # Examples
///
/// ```
/// use rb_collections::red_black_tree::{Error, RedBlackMap};
///
/// let mut map = RedBlackMap::new();
/// map.insert(1, 1);
///
/// let mut keys = map.keys();
/// assert!(keys.has_next());
/// assert_eq!(keys.next_key(), Ok(&1));
/// assert!(!keys.has_next());
/// assert_eq!(keys.next_key(), Err(Error::Exhausted));
/// assert_eq!(keys.remove(), Err(Error::Unsupported));
/// ```
pub struct Keys<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    /// Returns `true` if another key remains.
    pub fn has_next(&self) -> bool {
        self.iter.next.is_some()
    }

    /// Returns the next key, or `Error::Exhausted` if no key remains.
    pub fn next_key(&mut self) -> Result<&'a K> {
        self.next().ok_or(Error::Exhausted)
    }

    /// Always returns `Error::Unsupported`.
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::Unsupported)
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|pair| pair.0)
    }
}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// An iterator over the values of a `RedBlackMap<K, V, C>`, ordered by their keys.
pub struct Values<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|pair| pair.1)
    }
}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

/// A set view of the keys of a `RedBlackMap<K, V, C>`.
///
/// The view borrows the map, so its length and membership always mirror the map.
pub struct KeySet<'a, K, V, C>
where
    K: 'a,
    V: 'a,
    C: 'a,
{
    map: &'a RedBlackMap<K, V, C>,
}

impl<'a, K, V, C> KeySet<'a, K, V, C> {
    /// Returns the number of keys in the view.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Checks if a key exists in the view.
    pub fn contains(&self, key: &K) -> bool
    where
        C: Comparator<K>,
    {
        self.map.contains_key(key)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Keys<'a, K, V> {
        self.map.keys()
    }
}

impl<'a, K, V, C> Clone for KeySet<'a, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V, C> Copy for KeySet<'a, K, V, C> {}

impl<'a, K, V, C> IntoIterator for KeySet<'a, K, V, C> {
    type IntoIter = Keys<'a, K, V>;
    type Item = &'a K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, K, V, C> IntoIterator for &'b KeySet<'a, K, V, C> {
    type IntoIter = Keys<'a, K, V>;
    type Item = &'a K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> Default for RedBlackMap<K, V, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<'a, K, V, C> Index<&'a K> for RedBlackMap<K, V, C>
where
    C: Comparator<K>,
{
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, K, V, C> IndexMut<&'a K> for RedBlackMap<K, V, C>
where
    C: Comparator<K>,
{
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
