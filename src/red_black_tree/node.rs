use crate::arena::Handle;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A link to another node. `None` marks a missing child or the absence of a parent.
pub type Link = Option<Handle>;

/// A struct representing an internal node of a red black tree.
///
/// `left` and `right` are the structural edges of the tree. `parent` is a back-reference used by
/// rotations and in-order traversal only.
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub color: Color,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, parent: Link) -> Self {
        Node {
            key,
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}
