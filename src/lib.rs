//! An ordered, in-memory container built on an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and may have up to two child `Node`s. The invariants kept by
//! [`Tree`] are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    strictly less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! > The second rule is what allows duplicates: inserting a value that is
//! > already present walks right of the first equal `Node` it meets.
//!
//! Searching for a value takes `O(height)` where `height` is the longest
//! path from the root `Node` to a leaf `Node`. This tree never rebalances, so
//! inserting already sorted input produces a tree that is really a linked
//! list and every operation degrades to `O(N)`.
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree. That is the default iteration
//! order of [`Tree`], and it is driven by an explicit stack so it is safe on
//! degenerate trees. The pre-order, in-order and post-order visitor methods
//! recurse and use call stack proportional to the tree's height.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Order, Tree};
//!
//! let mut tree: Tree<i32> = [3, 1, 4, 2].into_iter().collect();
//!
//! assert_eq!(tree.to_vec(Order::Pre), vec![3, 1, 2, 4]);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//!
//! assert!(tree.remove(&2));
//! assert!(!tree.remove(&2));
//! assert_eq!(tree.to_vec(Order::Pre), vec![3, 1, 4]);
//! assert_eq!(tree.len(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod aggregate;
mod error;
mod node;
mod traverse;
mod tree;

#[cfg(test)]
mod test;

pub use error::{ParseOrderError, Result, SumError};
pub use traverse::{IntoIter, Iter, LevelOrder, Order, PostOrder, PreOrder};
pub use tree::Tree;
