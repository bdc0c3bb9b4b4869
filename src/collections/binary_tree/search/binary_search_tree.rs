use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use super::{Branch, InOrder, PostOrder, PreOrder};

/// An unbalanced binary search tree of keys. Each node owns both of its subtrees, every key in a
/// left subtree is less than the node's key and every key in a right subtree is greater than or
/// equal to it, so duplicate keys are all kept.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the tree.
/// - `h`: The height of the tree, which is anywhere from `log2 n` to `n` depending on the order
///   keys were inserted in.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `min/max` | `O(h)` |
/// | `height` | `O(n)` |
/// | traversals | `O(n)` |
///
/// # Examples
/// ```
/// # use teaching_collections::collections::binary_tree::BinarySearchTree;
/// let mut tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
/// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [50, 30, 20, 40, 70, 60, 80]);
/// assert_eq!(tree.min(), Some(&20));
///
/// assert!(tree.remove(&50));
/// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [20, 30, 40, 60, 70, 80]);
/// ```
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `key` as a new leaf. Inserting a key which is already present adds another copy,
    /// to the right of the existing one.
    pub fn insert(&mut self, key: T) {
        self.len += 1;
        self.root.insert(key);
    }

    /// Removes one copy of `key` from the tree, returning whether it was present.
    ///
    /// A node with two children takes the smallest key from its right subtree, which is unlinked
    /// in turn. The tree is never rebalanced.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.root.remove(key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key, or `None` if the tree is empty. With duplicates, this is the last
    /// copy inserted.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, which is 0 for an
    /// empty tree.
    pub fn height(&self) -> usize {
        let mut stack: Vec<_> = self.root.as_deref().map(|node| (node, 1)).into_iter().collect();
        let mut height = 0;

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Drops every key in the tree.
    pub fn clear(&mut self) {
        let mut curr = self.root.0.take();

        // Rotate left children up until the top node has none, then drop it and carry on with its
        // right subtree. Each node is dropped with both Branches empty, so nothing recurses.
        while let Some(mut node) = curr {
            curr = match node.left.0.take() {
                Some(mut left) => {
                    node.left.0 = left.right.0.take();
                    left.right.0 = Some(node);
                    Some(left)
                },
                None => node.right.0.take(),
            };
        }

        self.len = 0;
    }

    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.root)
    }

    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.root)
    }

    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.root)
    }

    /// Calls `visit` with each key, visiting nodes before their subtrees.
    pub fn for_each_pre_order<F: FnMut(&T)>(&self, visit: F) {
        self.pre_order().for_each(visit);
    }

    /// Calls `visit` with each key in ascending order.
    pub fn for_each_in_order<F: FnMut(&T)>(&self, visit: F) {
        self.in_order().for_each(visit);
    }

    /// Calls `visit` with each key, visiting subtrees before their nodes.
    pub fn for_each_post_order<F: FnMut(&T)>(&self, visit: F) {
        self.post_order().for_each(visit);
    }

    pub fn iter(&self) -> InOrder<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &format_args!("\n{:?}\n", self.root))
            .field("len", &self.len)
            .finish()
    }
}
