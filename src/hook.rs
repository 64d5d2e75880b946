//! Observing nodes as they leave a tree.
//!
//! Every [`OrderedTree`](crate::OrderedTree) owns a [`RemovalHook`] and calls it once for each
//! node it destroys: the node spliced out by a delete, or every node when the tree is cleared or
//! dropped. The default, [`Silent`], does nothing. [`Logged`] and [`Echo`] make destruction order
//! visible, and any `FnMut(&V)` closure can be used to collect or count removals.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{hook::Logged, OrderedTree};
//!
//! let mut tree = OrderedTree::with_hook(Logged);
//! tree.insert(5);
//! tree.insert(2);
//!
//! // Emits a `debug` record for 2 now and one for 5 when `tree` is dropped.
//! tree.delete(&2);
//! ```

use std::fmt;
use std::io;

/// Called with the value of every node as it is removed from a tree.
pub trait RemovalHook<V> {
    /// `value` is the value of the node being destroyed. For a delete of a node with two children
    /// this is the in-order successor's value, since it's the successor's node that goes away.
    fn on_remove(&mut self, value: &V);
}

/// Ignores removals.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<V> RemovalHook<V> for Silent {
    fn on_remove(&mut self, _value: &V) {}
}

/// Emits a `debug` log record for every removed node.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logged;

impl<V> RemovalHook<V> for Logged
where
    V: fmt::Debug,
{
    fn on_remove(&mut self, value: &V) {
        log::debug!("Node with value {:?} removed", value);
    }
}

/// Prints `Node with value: {value} deleted.` to standard output for every removed node.
#[derive(Clone, Copy, Debug, Default)]
pub struct Echo;

impl<V> RemovalHook<V> for Echo
where
    V: fmt::Display,
{
    fn on_remove(&mut self, value: &V) {
        EchoTo(io::stdout().lock()).on_remove(value);
    }
}

/// Like [`Echo`], but writes each line to the wrapped writer instead of standard output.
///
/// Write errors can't be returned from a hook, so they are logged at `warn` and the removal
/// carries on.
///
/// ```
/// use ordered_tree::{hook::EchoTo, OrderedTree};
///
/// let mut tree = OrderedTree::with_hook(EchoTo(Vec::new()));
/// tree.insert(3);
/// tree.delete(&3);
///
/// assert_eq!(tree.hook().0, b"Node with value: 3 deleted.\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EchoTo<W>(pub W);

impl<V, W> RemovalHook<V> for EchoTo<W>
where
    V: fmt::Display,
    W: io::Write,
{
    fn on_remove(&mut self, value: &V) {
        if let Err(error) = writeln!(self.0, "Node with value: {value} deleted.") {
            log::warn!("could not report removal of {value}: {error}");
        }
    }
}

impl<V, F> RemovalHook<V> for F
where
    F: FnMut(&V),
{
    fn on_remove(&mut self, value: &V) {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderedTree;

    #[test]
    fn closures_count_removals() {
        let mut removed = 0;
        {
            let mut tree = OrderedTree::with_hook(|_: &u32| removed += 1);
            for value in [4, 2, 6, 1, 3] {
                tree.insert(value);
            }
            assert!(tree.delete(&2));
            assert!(!tree.delete(&7));
        }

        assert_eq!(removed, 5);
    }

    #[test]
    fn builtin_hooks_can_be_used() {
        let mut logged = OrderedTree::with_hook(Logged);
        let mut echoed = OrderedTree::with_hook(Echo);
        for value in ["b", "a"] {
            logged.insert(value);
            echoed.insert(value);
        }

        assert!(logged.delete(&"a"));
        assert!(echoed.delete(&"b"));
        assert_eq!(logged.to_text(), "b ");
        assert_eq!(echoed.to_text(), "a ");
    }

    #[test]
    fn echo_lines_follow_removal_order() {
        let mut tree = OrderedTree::with_hook(EchoTo(Vec::new()));
        for value in [5, 11, 8, 9, 15, 2] {
            tree.insert(value);
        }
        assert!(tree.delete(&5));
        assert!(tree.delete(&2));
        tree.clear();

        let text = String::from_utf8(tree.hook().0.clone()).unwrap();
        assert_eq!(
            text,
            "Node with value: 8 deleted.\n\
             Node with value: 2 deleted.\n\
             Node with value: 8 deleted.\n\
             Node with value: 11 deleted.\n\
             Node with value: 9 deleted.\n\
             Node with value: 15 deleted.\n"
        );
    }

    #[test]
    fn default_tree_uses_default_hook() {
        let mut tree: OrderedTree<i32, Logged> = OrderedTree::default();
        tree.insert(1);

        assert_eq!(tree.to_text(), "1 ");
    }

    #[test]
    fn deep_clone_clones_hook() {
        let mut tree = OrderedTree::with_hook(Echo);
        tree.insert(1);
        let copy = tree.deep_clone();

        assert_eq!(copy.to_text(), "1 ");
        assert!(matches!(copy.hook(), Echo));
    }
}
