//! This crate exposes a single, unbalanced Binary Search Tree (BST) over an
//! ordered value type, along with the small pieces needed to observe and
//! exercise it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. Here a `Node` stores exactly one
//! value (there is no separate key) and may have up to two child `Node`s. The
//! most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that this means a value is stored at most once. Inserting a value
//! > that is already present leaves the tree untouched.
//!
//! Searching for values in the tree takes `O(height)` where `height` is the
//! longest path from the root `Node` to a leaf `Node`. This tree does no
//! rebalancing, so inserting values in sorted order degrades it into a list.
//! Every operation walks the tree with an explicit cursor or stack rather than
//! recursion, so such degenerate trees are slow but never overflow the stack.
//!
//! BSTs naturally support sorted output by visiting the left subtree, then the
//! subtree root, then the right subtree. See [`OrderedTree::to_text`] and
//! [`format`] for how that output is rendered.

#![deny(missing_docs)]

mod error;
pub mod fixture;
pub mod format;
pub mod hook;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{Node, OrderedTree};
