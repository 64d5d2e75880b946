use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Clone, Debug)]
pub enum Op<V> {
    /// Insert the V into the tree
    Insert(V),
    /// Delete the V from the tree
    Delete(V),
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(V::arbitrary(g))
        } else {
            Op::Delete(V::arbitrary(g))
        }
    }
}
