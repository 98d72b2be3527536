use crate::arena::{Handle, TypedArena};
use crate::comparator::Comparator;
use crate::red_black_tree::node::{Color, Link, Node};
use log::trace;
use std::cmp::Ordering;
use std::mem;

/// The raw red black tree. Every node is owned by the arena; links between nodes are handles.
pub struct Tree<K, V> {
    nodes: TypedArena<Node<K, V>>,
    root: Link,
}

impl<K, V> Tree<K, V> {
    pub fn new(chunk_size: usize) -> Self {
        Tree {
            nodes: TypedArena::new(chunk_size),
            root: None,
        }
    }

    pub fn root(&self) -> Link {
        self.root
    }

    pub fn node(&self, handle: Handle) -> &Node<K, V> {
        &self.nodes[handle]
    }

    pub fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        &mut self.nodes[handle]
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn is_red(&self, link: Link) -> bool {
        match link {
            None => false,
            Some(handle) => self.nodes[handle].is_red(),
        }
    }

    // Returns the parent of `handle` if it is red.
    fn red_parent(&self, handle: Handle) -> Link {
        self.nodes[handle].parent.filter(|parent| self.nodes[*parent].is_red())
    }

    fn paint(&mut self, handle: Handle, color: Color) {
        self.nodes[handle].color = color;
    }

    /// Inserts a key-value pair. If the key already exists, its value is replaced in place and the
    /// old value is returned; the shape and colors of the tree are left untouched.
    pub fn insert<C>(&mut self, comparator: &C, key: K, value: V) -> Option<V>
    where
        C: Comparator<K>,
    {
        let mut parent = None;
        let mut curr = self.root;
        let mut ordering = Ordering::Greater;
        while let Some(handle) = curr {
            parent = curr;
            let node = &mut self.nodes[handle];
            ordering = comparator.compare(&key, &node.key);
            curr = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            };
        }

        let handle = self.nodes.allocate(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(parent) => {
                if ordering == Ordering::Less {
                    self.nodes[parent].left = Some(handle);
                } else {
                    self.nodes[parent].right = Some(handle);
                }
            },
        }

        self.rebalance(handle);
        None
    }

    // A freshly inserted red node can only break the rule that a red node has no red child. Each
    // iteration either fixes the violation or moves it two levels up.
    fn rebalance(&mut self, inserted: Handle) {
        let mut node = inserted;
        while let Some(parent) = self.red_parent(node) {
            // a red node is never the root, so it has a parent
            let grandparent = self.nodes[parent]
                .parent
                .expect("Expected red parent to have a parent.");

            if self.nodes[grandparent].left == Some(parent) {
                let uncle = self.nodes[grandparent].right;
                match uncle.filter(|_| self.is_red(uncle)) {
                    Some(uncle) => {
                        trace!("rebalance: red uncle, recoloring at {:?}", grandparent);
                        self.paint(parent, Color::Black);
                        self.paint(uncle, Color::Black);
                        self.paint(grandparent, Color::Red);
                        node = grandparent;
                    },
                    None => {
                        let mut parent = parent;
                        if self.nodes[parent].right == Some(node) {
                            trace!("rebalance: inner grandchild, rotating left at {:?}", parent);
                            self.rotate_left(parent);
                            mem::swap(&mut node, &mut parent);
                        }
                        trace!("rebalance: outer grandchild, rotating right at {:?}", grandparent);
                        self.paint(parent, Color::Black);
                        self.paint(grandparent, Color::Red);
                        self.rotate_right(grandparent);
                    },
                }
            } else {
                let uncle = self.nodes[grandparent].left;
                match uncle.filter(|_| self.is_red(uncle)) {
                    Some(uncle) => {
                        trace!("rebalance: red uncle, recoloring at {:?}", grandparent);
                        self.paint(parent, Color::Black);
                        self.paint(uncle, Color::Black);
                        self.paint(grandparent, Color::Red);
                        node = grandparent;
                    },
                    None => {
                        let mut parent = parent;
                        if self.nodes[parent].left == Some(node) {
                            trace!("rebalance: inner grandchild, rotating right at {:?}", parent);
                            self.rotate_right(parent);
                            mem::swap(&mut node, &mut parent);
                        }
                        trace!("rebalance: outer grandchild, rotating left at {:?}", grandparent);
                        self.paint(parent, Color::Black);
                        self.paint(grandparent, Color::Red);
                        self.rotate_left(grandparent);
                    },
                }
            }
        }

        if let Some(root) = self.root {
            self.paint(root, Color::Black);
        }
    }

    // Points `parent`'s link to `old` at `new` instead. A missing parent means `old` was the root.
    fn replace_child(&mut self, parent: Link, old: Handle, new: Handle) {
        self.nodes[new].parent = parent;
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                let parent_node = &mut self.nodes[parent];
                if parent_node.left == Some(old) {
                    parent_node.left = Some(new);
                } else {
                    parent_node.right = Some(new);
                }
            },
        }
    }

    //       |                            |
    //      {n}      ROTATE-LEFT(n)      {c}
    //     /   \          ->            /   \
    //   {a}   {c}                    {n}   {z}
    //        /   \                  /   \
    //      {b}   {z}              {a}   {b}
    pub fn rotate_left(&mut self, node: Handle) {
        let child = self.nodes[node]
            .right
            .expect("Expected right child node to be `Some`.");
        let inner = self.nodes[child].left;
        self.nodes[node].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }

        let parent = self.nodes[node].parent;
        self.replace_child(parent, node, child);
        self.nodes[child].left = Some(node);
        self.nodes[node].parent = Some(child);
    }

    pub fn rotate_right(&mut self, node: Handle) {
        let child = self.nodes[node]
            .left
            .expect("Expected left child node to be `Some`.");
        let inner = self.nodes[child].right;
        self.nodes[node].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }

        let parent = self.nodes[node].parent;
        self.replace_child(parent, node, child);
        self.nodes[child].right = Some(node);
        self.nodes[node].parent = Some(child);
    }

    pub fn find<C>(&self, comparator: &C, key: &K) -> Link
    where
        C: Comparator<K>,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            curr = match comparator.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub fn floor<C>(&self, comparator: &C, key: &K) -> Link
    where
        C: Comparator<K>,
    {
        let mut best = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            curr = match comparator.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    best = Some(handle);
                    node.right
                },
                Ordering::Equal => return Some(handle),
            };
        }
        best
    }

    pub fn ceil<C>(&self, comparator: &C, key: &K) -> Link
    where
        C: Comparator<K>,
    {
        let mut best = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            curr = match comparator.compare(key, &node.key) {
                Ordering::Less => {
                    best = Some(handle);
                    node.left
                },
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        best
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes[handle].left {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes[handle].right {
            handle = right;
        }
        handle
    }

    pub fn first(&self) -> Link {
        self.root.map(|root| self.leftmost(root))
    }

    pub fn last(&self) -> Link {
        self.root.map(|root| self.rightmost(root))
    }

    /// Returns the node that follows `handle` in key order. If a right child exists, the
    /// successor is the leftmost node of the right subtree; otherwise it is the first ancestor
    /// reached from a left-child edge.
    pub fn successor(&self, handle: Handle) -> Link {
        if let Some(right) = self.nodes[handle].right {
            return Some(self.leftmost(right));
        }

        let mut child = handle;
        let mut parent = self.nodes[handle].parent;
        while let Some(curr) = parent {
            if self.nodes[curr].left == Some(child) {
                return Some(curr);
            }
            child = curr;
            parent = self.nodes[curr].parent;
        }
        None
    }
}

#[cfg(test)]
impl<K, V> Tree<K, V> {
    /// Asserts every red black property, the ordering of keys and the consistency of parent
    /// links. Returns the number of reachable nodes.
    pub fn check_invariants<C>(&self, comparator: &C) -> usize
    where
        C: Comparator<K>,
    {
        if let Some(root) = self.root {
            assert_eq!(self.nodes[root].color, Color::Black, "root must be black");
            assert_eq!(self.nodes[root].parent, None, "root must not have a parent");
        }
        let mut count = 0;
        self.check_subtree(comparator, self.root, None, None, &mut count);
        count
    }

    // Returns the black height of the subtree, counting the missing children as black.
    fn check_subtree<C>(
        &self,
        comparator: &C,
        link: Link,
        lower: Option<&K>,
        upper: Option<&K>,
        count: &mut usize,
    ) -> usize
    where
        C: Comparator<K>,
    {
        let handle = match link {
            None => return 1,
            Some(handle) => handle,
        };
        *count += 1;

        let node = &self.nodes[handle];
        if let Some(lower) = lower {
            assert_eq!(comparator.compare(lower, &node.key), Ordering::Less);
        }
        if let Some(upper) = upper {
            assert_eq!(comparator.compare(&node.key, upper), Ordering::Less);
        }

        for child in [node.left, node.right].iter().filter_map(|child| *child) {
            assert_eq!(self.nodes[child].parent, Some(handle), "broken parent link");
            if node.is_red() {
                assert!(!self.nodes[child].is_red(), "red node with a red child");
            }
        }

        let left_height = self.check_subtree(comparator, node.left, lower, Some(&node.key), count);
        let right_height =
            self.check_subtree(comparator, node.right, Some(&node.key), upper, count);
        assert_eq!(left_height, right_height, "unequal black heights");

        match node.color {
            Color::Black => left_height + 1,
            Color::Red => left_height,
        }
    }
}
