use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;

/// An owned, optional subtree. Every recursive operation on the tree is written against a Branch
/// so that replacing a node is just assigning to the Branch that owns it.
pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub key: T,
}

impl<T: Ord> Node<T> {
    pub fn leaf(key: T) -> Box<Node<T>> {
        Box::new(Node {
            left: Branch(None),
            right: Branch(None),
            key,
        })
    }
}

impl<T: Ord> Branch<T> {
    /// Inserts `key` as a new leaf. Keys equal to a node's key are placed in its right subtree.
    pub fn insert(&mut self, key: T) {
        match &mut self.0 {
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.insert(key),
                Ordering::Equal | Ordering::Greater => node.right.insert(key),
            },
            None => self.0 = Some(Node::leaf(key)),
        }
    }

    /// Removes the first node found with a key equal to `key`, returning whether there was one.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(node) = &mut self.0 else {
            return false;
        };

        match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left.remove(key),
            Ordering::Greater => node.right.remove(key),
            Ordering::Equal => {
                if node.left.is_none() {
                    let right = node.right.0.take();
                    self.0 = right;
                } else if node.right.is_none() {
                    let left = node.left.0.take();
                    self.0 = left;
                } else if let Some(successor) = node.right.take_min() {
                    // The smallest key on the right is still >= everything on the left, and <=
                    // everything left on the right.
                    node.key = successor;
                }
                true
            },
        }
    }

    /// Unlinks the leftmost node of this subtree and returns its key, splicing its right subtree
    /// into its place.
    pub fn take_min(&mut self) -> Option<T> {
        let node = self.0.as_mut()?;
        if node.left.is_some() {
            return node.left.take_min();
        }

        let min = self.0.take()?;
        let Node { right, key, .. } = *min;
        *self = right;
        Some(key)
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One line of the sideways rendering: either a whole subtree still to be expanded, or a key.
enum Row<'a, T: Ord> {
    Branch(&'a Branch<T>),
    Key(&'a T),
}

/// Draws the subtree sideways, with left children above their parent (`┌`) and right children
/// below it (`└`). Rows are expanded from an explicit stack, so a degenerate tree can't overflow
/// the call stack, although the output still grows with the square of its height.
impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(Row::Branch(self), String::new())];
        let mut first = true;

        while let Some((row, indent)) = stack.pop() {
            if let Row::Branch(Branch(Some(node))) = row {
                stack.push((Row::Branch(&node.right), indent.clone() + "└    "));
                stack.push((Row::Key(&node.key), indent.clone()));
                stack.push((Row::Branch(&node.left), indent + "┌    "));
                continue;
            }

            if !first {
                writeln!(f)?;
            }
            first = false;

            match row {
                Row::Key(key) => write!(f, "{indent}({key:?})")?,
                Row::Branch(_) => write!(f, "{indent}-")?,
            }
        }

        Ok(())
    }
}
