//! An unbalanced BST over a single ordered value type. Every `Node` is uniquely owned by its
//! parent (or by the tree for the root) so removing a node is a matter of splicing a replacement
//! into the slot that owned it.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&5).is_none());
//!
//! for value in [5, 11, 8, 9, 15, 2] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.to_text(), "2 5 8 9 11 15 ");
//!
//! // Inserting a value that is already present is ignored.
//! tree.insert(9);
//! assert_eq!(tree.to_text(), "2 5 8 9 11 15 ");
//!
//! // Deleting the root promotes its in-order successor.
//! assert!(tree.delete(&5));
//! assert_eq!(tree.root().map(|root| *root.value()), Some(8));
//! assert_eq!(tree.to_text(), "2 8 9 11 15 ");
//!
//! // Deleting something that isn't there reports it.
//! assert!(!tree.delete(&12));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use crate::format::{InOrder, Spaced, ValueFormat};
use crate::hook::{RemovalHook, Silent};

type Link<V> = Option<Box<Node<V>>>;

/// A single value in the tree along with the (optional) subtrees hanging off of it.
pub struct Node<V> {
    value: V,
    left: Link<V>,
    right: Link<V>,
}

impl<V> Node<V> {
    fn new_boxed(value: V) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The root of the left subtree. Every value in it is less than [`Node::value`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree. Every value in it is greater than [`Node::value`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<V> fmt::Debug for Node<V>
where
    V: fmt::Debug,
{
    // Only the direct children are shown so this never recurses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// A Binary Search Tree. This can be used for inserting, finding, and deleting values, and for
/// writing them out in ascending order.
///
/// The tree deliberately implements neither `Clone` nor `Copy`: duplicating it means duplicating
/// every node, so that is spelled out as [`OrderedTree::deep_clone`].
///
/// Every node that leaves the tree, whether through [`OrderedTree::delete`],
/// [`OrderedTree::clear`], or dropping the tree, is reported to the tree's [`RemovalHook`].
pub struct OrderedTree<V, H = Silent>
where
    H: RemovalHook<V>,
{
    root: Link<V>,
    hook: H,
}

impl<V> OrderedTree<V, Silent> {
    /// Generate a new, empty `OrderedTree` that removes nodes silently.
    pub fn new() -> Self {
        Self::with_hook(Silent)
    }
}

impl<V, H> Default for OrderedTree<V, H>
where
    H: RemovalHook<V> + Default,
{
    fn default() -> Self {
        Self::with_hook(H::default())
    }
}

impl<V, H> Drop for OrderedTree<V, H>
where
    H: RemovalHook<V>,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V, H> fmt::Debug for OrderedTree<V, H>
where
    V: fmt::Debug,
    H: RemovalHook<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("values", &self.in_order())
            .finish()
    }
}

impl<V, H> OrderedTree<V, H>
where
    H: RemovalHook<V>,
{
    /// Generate a new, empty `OrderedTree` that reports every removed node to `hook`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use ordered_tree::OrderedTree;
    ///
    /// let removed = RefCell::new(Vec::new());
    /// let mut tree = OrderedTree::with_hook(|value: &i32| removed.borrow_mut().push(*value));
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// tree.delete(&2);
    /// drop(tree);
    ///
    /// assert_eq!(removed.into_inner(), vec![2, 1]);
    /// ```
    pub fn with_hook(hook: H) -> Self {
        Self { root: None, hook }
    }

    /// The hook this tree reports removed nodes to.
    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// The root node, if the tree has any nodes at all.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<V>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        tallest
    }

    /// Removes every node from the tree. Nodes are handed to the hook parent first, then the
    /// left subtree, then the right subtree.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            self.hook.on_remove(&node.value);
            // Detach the children before `node` goes out of scope so dropping it never recurses.
            stack.extend(node.right.take());
            stack.extend(node.left.take());
        }
    }

    /// Every value in the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for value in ["pear", "apple", "fig"] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.in_order(), vec![&"apple", &"fig", &"pear"]);
    /// ```
    pub fn in_order(&self) -> Vec<&V> {
        Walk::new(self.root()).collect()
    }

    /// A [`fmt::Display`] view of the tree that renders each value, in ascending order, with
    /// `format`.
    pub fn display_with<'a, F>(&'a self, format: &'a F) -> InOrder<'a, V, F>
    where
        F: ValueFormat<V> + ?Sized,
    {
        InOrder::new(self.root(), format)
    }

    /// Renders the values in ascending order, each followed by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.to_text(), "");
    ///
    /// tree.insert(5);
    /// assert_eq!(tree.to_text(), "5 ");
    /// ```
    pub fn to_text(&self) -> String
    where
        V: fmt::Display,
    {
        self.to_text_with(&Spaced)
    }

    /// Renders the values in ascending order using `format` for each one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{format::Packed, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(true);
    /// tree.insert(false);
    ///
    /// assert_eq!(tree.to_text_with(&Packed), "falsetrue");
    /// ```
    pub fn to_text_with<F>(&self, format: &F) -> String
    where
        F: ValueFormat<V> + ?Sized,
    {
        self.display_with(format).to_string()
    }

    /// Writes [`OrderedTree::to_text`] followed by a newline to `out`.
    pub fn write_to<W>(&self, out: W) -> io::Result<()>
    where
        W: Write,
        V: fmt::Display,
    {
        self.write_to_with(out, &Spaced)
    }

    /// Writes [`OrderedTree::to_text_with`] followed by a newline to `out`.
    pub fn write_to_with<W, F>(&self, mut out: W, format: &F) -> io::Result<()>
    where
        W: Write,
        F: ValueFormat<V> + ?Sized,
    {
        writeln!(out, "{}", self.display_with(format))?;
        out.flush()
    }

    /// Writes [`OrderedTree::to_text`] followed by a newline to standard output.
    pub fn print(&self) -> io::Result<()>
    where
        V: fmt::Display,
    {
        self.write_to(io::stdout().lock())
    }
}

impl<V, H> OrderedTree<V, H>
where
    V: Ord,
    H: RemovalHook<V>,
{
    /// Potentially finds the node holding `value`. If no node has it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(9);
    ///
    /// assert_eq!(tree.find(&9).map(|n| *n.value()), Some(9));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &V) -> Option<&Node<V>> {
        let mut current = self.root();
        while let Some(node) = current {
            if *value < node.value {
                current = node.left();
            } else if *value > node.value {
                current = node.right();
            } else {
                return Some(node);
            }
        }

        None
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &V) -> bool {
        self.find(value).is_some()
    }

    /// Inserts `value` into the tree and returns the node holding it. If the tree already holds
    /// an equal value, nothing changes: `value` is dropped and the existing node is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(*tree.insert(5).value(), 5);
    /// assert_eq!(*tree.insert(5).value(), 5);
    /// assert_eq!(tree.to_text(), "5 ");
    /// ```
    pub fn insert(&mut self, value: V) -> &Node<V> {
        let slot = locate(&mut self.root, &value);
        if slot.is_some() {
            log::trace!("OrderedTree::insert found an equal value, leaving the tree unchanged");
        }

        slot.get_or_insert_with(|| Node::new_boxed(value))
    }

    /// Deletes the node holding `value` and returns whether there was one. If the tree does not
    /// contain `value`, nothing happens.
    ///
    /// A node with two children is not removed itself. It takes the value of its in-order
    /// successor and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: &V) -> bool {
        let slot = locate(&mut self.root, value);
        let Some(mut node) = slot.take() else {
            log::trace!("OrderedTree::delete could not find the value");
            return false;
        };

        match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                log::trace!(
                    "OrderedTree::delete splicing in the only child (present: {})",
                    child.is_some()
                );
                *slot = child;
                self.hook.on_remove(&node.value);
            }
            (left, right) => {
                log::trace!("OrderedTree::delete promoting the in-order successor");
                node.left = left;
                node.right = right;

                let successor_slot = leftmost(&mut node.right);
                if let Some(mut successor) = successor_slot.take() {
                    *successor_slot = successor.right.take();
                    self.hook.on_remove(&successor.value);
                    let Node {
                        value: promoted, ..
                    } = *successor;
                    node.value = promoted;
                }
                *slot = Some(node);
            }
        }

        true
    }

    /// Builds an independent tree with the same values in exactly the same shape. The hook is
    /// cloned along with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut copy = tree.deep_clone();
    /// copy.delete(&1);
    ///
    /// assert_eq!(tree.to_text(), "1 2 ");
    /// assert_eq!(copy.to_text(), "2 ");
    /// ```
    pub fn deep_clone(&self) -> Self
    where
        V: Clone,
        H: Clone,
    {
        let mut copy = Self::with_hook(self.hook.clone());

        // Re-inserting in pre-order rebuilds the same shape: every parent lands before its
        // children and each child takes the same side of its parent as in `self`.
        let mut stack: Vec<&Node<V>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            copy.insert(node.value.clone());
            stack.extend(node.right());
            stack.extend(node.left());
        }

        copy
    }
}

/// Walks down from `link` towards `value` and returns the slot that either holds the node with
/// that value or is the empty slot where it would be inserted.
fn locate<'a, V>(mut link: &'a mut Link<V>, value: &V) -> &'a mut Link<V>
where
    V: Ord,
{
    loop {
        // Decide on a shared borrow, then move `link` into the match so the returned slot is
        // never borrowed twice.
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return link,
        };
        match (ordering, link) {
            (Ordering::Less, Some(node)) => link = &mut node.left,
            (Ordering::Greater, Some(node)) => link = &mut node.right,
            (_, link) => return link,
        }
    }
}

/// The slot holding the leftmost (smallest) node of the subtree in `link`.
fn leftmost<V>(mut link: &mut Link<V>) -> &mut Link<V> {
    loop {
        let descend = matches!(link.as_deref(), Some(node) if node.left.is_some());
        match (descend, link) {
            (true, Some(node)) => link = &mut node.left,
            (_, link) => return link,
        }
    }
}

/// In-order walk over a subtree using an explicit stack of the ancestors still to be visited.
pub(crate) struct Walk<'a, V> {
    stack: Vec<&'a Node<V>>,
    next: Option<&'a Node<V>>,
}

impl<'a, V> Walk<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>) -> Self {
        Self {
            stack: Vec::new(),
            next: root,
        }
    }
}

impl<'a, V> Iterator for Walk<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next {
            self.stack.push(node);
            self.next = node.left();
        }
        let node = self.stack.pop()?;
        self.next = node.right();

        Some(&node.value)
    }
}
