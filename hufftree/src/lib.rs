/*!
Builds optimal prefix codes (huffman trees) for the characters of a text.

The two lightest nodes are merged repeatedly until a single tree is left. Nodes waiting to be
merged are kept in a [`BucketMultimap`](common::BucketMultimap) indexed by weight.
*/

pub mod tree;
pub use crate::tree::tree_node::Node;
pub use crate::tree::Tree;
pub use crate::tree::TreeBuilder;

use common::{Symbol, Weight};
use std::collections::BTreeMap;

/// code of the only symbol, when a text consists of a single distinct symbol
pub const SINGLE_LEAF_CODE: &[bool] = &[false];

/// creates a table with the counts of each symbol
#[inline]
pub fn count(text: &str) -> BTreeMap<Symbol, Weight> {
    let mut counts = BTreeMap::new();
    for symbol in text.chars() {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}
