//! An ordered map and set implemented as a red black tree whose keys are ordered by a comparator
//! supplied at construction.
//!
//! Nodes are stored in a typed arena and linked by handles, so the parent links used by the
//! rebalancing rotations and by in-order iteration never own the nodes they point to.

pub mod arena;
pub mod comparator;
pub mod red_black_tree;
