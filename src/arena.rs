//! Append-only typed arena used to store tree nodes.

use std::cmp;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to an object allocated in a `TypedArena<T>`.
///
/// Handles are plain indices, so they are cheap to copy and can be stored in both directions of a
/// linked structure without affecting the lifetime of the objects they refer to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

/// An allocator that stores objects of a single type in fixed-size chunks.
///
/// Objects live until the arena is cleared or dropped. When every chunk is full, a new chunk is
/// allocated, so objects are never moved and existing handles stay valid.
///
/// # Examples
///
/// ```
/// use rb_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
/// assert_eq!(arena.len(), 1);
/// ```
pub struct TypedArena<T> {
    chunks: Vec<Vec<T>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn is_valid_handle(&self, handle: &Handle) -> bool {
        handle.chunk_index < self.chunks.len()
            && handle.block_index < self.chunks[handle.chunk_index].len()
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk. A
    /// chunk size of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// // creates a new TypedArena<T> that contains a maximum of 1024 u32's per chunk
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        TypedArena {
            chunks: Vec::new(),
            chunk_size: cmp::max(chunk_size, 1),
            len: 0,
            capacity: 0,
        }
    }

    /// Allocates an object in the typed arena and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.len += 1;

        let chunk_index = self.chunks.len() - 1;
        let last_chunk = &mut self.chunks[chunk_index];
        last_chunk.push(value);
        Handle {
            chunk_index,
            block_index: last_chunk.len() - 1,
        }
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the
    /// handle does not correspond to an allocated object.
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        Some(&self.chunks[handle.chunk_index][handle.block_index])
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the handle
    /// does not correspond to an allocated object.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// *arena.get_mut(&x).unwrap() = 3;
    /// assert_eq!(arena[x], 3);
    /// ```
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        Some(&mut self.chunks[handle.chunk_index][handle.block_index])
    }

    /// Returns the number of objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object in the arena. Previously returned handles become invalid.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
        self.capacity = 0;
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;
    use super::TypedArena;

    #[test]
    fn test_allocate() {
        let mut arena = TypedArena::new(1024);
        assert_eq!(
            arena.allocate(0),
            Handle {
                chunk_index: 0,
                block_index: 0
            },
        );
        assert_eq!(
            arena.allocate(0),
            Handle {
                chunk_index: 0,
                block_index: 1
            },
        );
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = TypedArena::new(2);
        arena.allocate(0);
        arena.allocate(1);
        assert_eq!(
            arena.allocate(2),
            Handle {
                chunk_index: 1,
                block_index: 0
            },
        );
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_zero_chunk_size() {
        let mut arena = TypedArena::new(0);
        let x = arena.allocate(7);
        let y = arena.allocate(8);
        assert_eq!(arena[x], 7);
        assert_eq!(arena[y], 8);
    }

    #[test]
    fn test_get_invalid_handle() {
        let arena: TypedArena<u32> = TypedArena::new(1024);
        assert_eq!(
            arena.get(&Handle {
                chunk_index: 0,
                block_index: 0
            }),
            None,
        );
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0);
        *arena.get_mut(&handle).unwrap() = 1;
        assert_eq!(arena.get(&handle), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(&handle), None);
        assert_eq!(arena.allocate(5), handle);
    }

    #[test]
    #[should_panic]
    fn test_index_invalid_handle() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0);
        arena.clear();
        assert_eq!(arena[handle], 0);
    }
}
