use crate::count;
use crate::tree::tree_node::Node;
use crate::tree::Tree;
use common::{BucketMultimap, Result, Symbol, Weight};
use log::{debug, trace};
use std::collections::BTreeMap;

/// Builds a huffman tree from the symbol frequencies of a text.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    /// occurences per symbol, symbols with zero occurences are never stored
    frequencies: BTreeMap<Symbol, Weight>,
}

impl TreeBuilder {
    /// counts the symbols of `text`
    pub fn new(text: &str) -> Self {
        TreeBuilder {
            frequencies: count(text),
        }
    }

    /// uses an existing frequency table, zero counts are dropped
    pub fn from_frequencies(mut frequencies: BTreeMap<Symbol, Weight>) -> Self {
        frequencies.retain(|_, weight| *weight != 0);
        TreeBuilder { frequencies }
    }

    pub fn frequencies(&self) -> &BTreeMap<Symbol, Weight> {
        &self.frequencies
    }

    /// Merges the two lightest nodes until a single node is left.
    ///
    /// Leafs are added in ascending symbol order. Nodes of equal weight are taken most recently added
    /// first, the first taken node becomes the left child. The same frequencies therefore always
    /// produce the same tree.
    pub fn tree(&self) -> Result<Tree> {
        let mut buckets = BucketMultimap::new();
        for (symbol, weight) in &self.frequencies {
            buckets.add(*weight, Node::leaf(*symbol, *weight));
        }
        debug!(
            "building tree from {} symbols in {} buckets",
            buckets.len(),
            buckets.num_buckets()
        );

        while !buckets.is_singleton() {
            let (left_weight, left) = buckets.pop_min()?;
            let (right_weight, right) = buckets.pop_min()?;
            trace!("merge {} + {}", left_weight, right_weight);
            let parent = Node::merge(left, right);
            buckets.add(parent.weight(), parent);
        }
        let (_, root) = buckets.pop_min()?;
        Ok(Tree::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CodecError;

    #[test]
    fn empty_text_has_no_tree() {
        assert_eq!(TreeBuilder::new("").tree(), Err(CodecError::Empty));
    }

    #[test]
    fn single_symbol_is_a_leaf() {
        let tree = TreeBuilder::new("aaaa").tree().unwrap();
        assert_eq!(tree.root(), &Node::leaf('a', 4));
    }

    #[test]
    fn zero_frequencies_are_dropped() {
        let mut frequencies = BTreeMap::new();
        frequencies.insert('a', 3);
        frequencies.insert('b', 0);
        let builder = TreeBuilder::from_frequencies(frequencies);
        assert_eq!(builder.frequencies().len(), 1);
        assert!(!builder.frequencies().contains_key(&'b'));
    }

    #[test]
    fn equal_weights_are_taken_lifo() {
        // 'a' and 'b' both have weight 1, 'b' was added last and is taken first
        let tree = TreeBuilder::new("ab").tree().unwrap();
        assert_eq!(
            tree.root(),
            &Node::merge(Node::leaf('b', 1), Node::leaf('a', 1))
        );
    }

    #[test]
    fn second_pop_may_use_next_bucket() {
        // a:1 b:2 c:4 → (a, b) = 3, then (3, c)
        let tree = TreeBuilder::new("abbcccc").tree().unwrap();
        assert_eq!(
            tree.root(),
            &Node::merge(
                Node::merge(Node::leaf('a', 1), Node::leaf('b', 2)),
                Node::leaf('c', 4)
            )
        );
    }

    #[test]
    fn merged_node_is_preferred_on_tie() {
        // a:1 b:1 c:2 → (b, a) = 2 is pushed on top of c and is taken first
        let tree = TreeBuilder::new("abcc").tree().unwrap();
        assert_eq!(
            tree.root(),
            &Node::merge(
                Node::merge(Node::leaf('b', 1), Node::leaf('a', 1)),
                Node::leaf('c', 2)
            )
        );
    }

    #[test]
    fn same_input_same_tree() {
        let text = "abcdefgh hgfedcba aabbccdd";
        let first = TreeBuilder::new(text).tree().unwrap();
        for _ in 0..10 {
            assert_eq!(TreeBuilder::new(text).tree().unwrap(), first);
        }
    }
}
