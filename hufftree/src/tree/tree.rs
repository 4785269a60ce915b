use super::tree_node::Node;
use crate::tree::render_tree::render_plan_to;
use crate::SINGLE_LEAF_CODE;
use bitstream::BitString;
use common::{Symbol, Weight};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    /// the root is a leaf only when the text consists of a single distinct symbol
    pub(crate) root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Tree { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// total weight, equals the length of the counted text
    pub fn weight(&self) -> Weight {
        self.root.weight()
    }

    pub fn num_symbols(&self) -> usize {
        self.root.num_leafs()
    }

    /// length of the longest code
    pub fn depth(&self) -> usize {
        self.root.height().max(SINGLE_LEAF_CODE.len())
    }

    /// Visits every node depth first, left before right. The path to each node is passed with '0' for
    /// every left and '1' for every right descent, the root has an empty path.
    pub fn walk<F>(&self, fun: &mut F)
    where
        F: FnMut(&Node, &BitString),
    {
        let mut path = BitString::new();
        walk_internal(&self.root, &mut path, fun);
    }

    /// Visits every leaf with its code. A tree consisting of a single leaf assigns it `SINGLE_LEAF_CODE`.
    pub fn walk_leafs<F>(&self, fun: &mut F)
    where
        F: FnMut(Symbol, Weight, &BitString),
    {
        if let Node::Leaf { symbol, weight } = &self.root {
            let code = BitString::from(SINGLE_LEAF_CODE.to_vec());
            fun(*symbol, *weight, &code);
            return;
        }
        self.walk(&mut |node, path| {
            if let Node::Leaf { symbol, weight } = node {
                fun(*symbol, *weight, path);
            }
        });
    }

    /// code length in bits for every symbol
    pub fn code_lengths(&self) -> BTreeMap<Symbol, usize> {
        let mut lengths = BTreeMap::new();
        self.walk_leafs(&mut |symbol, _weight, code| {
            lengths.insert(symbol, code.len());
        });
        lengths
    }

    /// sum of weight * code length over all symbols, which is the size of the encoded text in bits
    pub fn weighted_length(&self) -> u64 {
        let mut size_in_bits = 0;
        self.walk_leafs(&mut |_symbol, weight, code| {
            size_in_bits += weight * code.len() as u64;
        });
        size_in_bits
    }

    /// returns estimated compressed size in byte
    pub fn estimate_compressed_size(&self) -> usize {
        ((self.weighted_length() + 7) / 8) as usize
    }
}

fn walk_internal<F>(node: &Node, path: &mut BitString, fun: &mut F)
where
    F: FnMut(&Node, &BitString),
{
    fun(node, path);
    if let Node::Internal { left, right, .. } = node {
        path.push(false);
        walk_internal(left, path, fun);
        path.pop();
        path.push(true);
        walk_internal(right, path, fun);
        path.pop();
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(self, f)
    }
}
