//! How values are rendered when a tree is written out as text.
//!
//! A tree is always written in ascending order. What each value looks like and what separates it
//! from the next is up to a [`ValueFormat`]. [`Spaced`] is what [`OrderedTree::to_text`] uses.
//! [`Packed`] drops the separator, which reads well for values such as `bool` or `String` that
//! are already self-delimiting for the caller. Any closure taking a value and a
//! [`fmt::Formatter`] works too.
//!
//! # Examples
//!
//! ```
//! use std::fmt;
//! use ordered_tree::{format::Packed, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! for value in [3, 1, 2] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.to_text(), "1 2 3 ");
//! assert_eq!(tree.to_text_with(&Packed), "123");
//!
//! let bracketed = |value: &i32, f: &mut fmt::Formatter<'_>| write!(f, "[{value}]");
//! assert_eq!(tree.to_text_with(&bracketed), "[1][2][3]");
//! assert_eq!(format!("<{}>", tree.display_with(&Packed)), "<123>");
//! ```
//!
//! [`OrderedTree::to_text`]: crate::OrderedTree::to_text

use std::fmt;

use crate::tree::{Node, Walk};

/// Renders a single value of a tree.
pub trait ValueFormat<V: ?Sized> {
    /// Writes `value` (and anything that should follow it) to `f`.
    fn fmt_value(&self, value: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Each value's `Display` output followed by a single space, e.g. `"2 5 8 "`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spaced;

impl<V> ValueFormat<V> for Spaced
where
    V: fmt::Display + ?Sized,
{
    fn fmt_value(&self, value: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{value} ")
    }
}

/// Each value's `Display` output with nothing in between, e.g. `"falsetrue"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Packed;

impl<V> ValueFormat<V> for Packed
where
    V: fmt::Display + ?Sized,
{
    fn fmt_value(&self, value: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{value}")
    }
}

impl<V, F> ValueFormat<V> for F
where
    V: ?Sized,
    F: Fn(&V, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt_value(&self, value: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self(value, f)
    }
}

/// Displays every value of a tree in ascending order. Returned by
/// [`OrderedTree::display_with`](crate::OrderedTree::display_with).
pub struct InOrder<'a, V, F: ?Sized> {
    root: Option<&'a Node<V>>,
    format: &'a F,
}

impl<'a, V, F: ?Sized> InOrder<'a, V, F> {
    pub(crate) fn new(root: Option<&'a Node<V>>, format: &'a F) -> Self {
        Self { root, format }
    }
}

impl<V, F> fmt::Display for InOrder<'_, V, F>
where
    F: ValueFormat<V> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in Walk::new(self.root) {
            self.format.fmt_value(value, f)?;
        }

        Ok(())
    }
}
