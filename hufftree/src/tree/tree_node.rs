use common::{Symbol, Weight};

/// A node of the huffman tree. Internal nodes own their children exclusively.
#[derive(Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        /// the number of occurences
        weight: Weight,
    },
    Internal {
        /// sum of the weights of both children
        weight: Weight,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: Symbol, weight: Weight) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// creates a parent owning `left` and `right`
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// number of leafs below and including this node
    pub fn num_leafs(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.num_leafs() + right.num_leafs(),
        }
    }

    /// length of the longest path from this node to a leaf
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Node::Leaf { symbol, weight } => {
                f.write_fmt(format_args!("({:?}, {})", symbol, weight))
            }
            Node::Internal {
                weight,
                left,
                right,
            } => f.write_fmt(format_args!("({}, {:?}, {:?})", weight, left, right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_weights() {
        let node = Node::merge(Node::leaf('a', 2), Node::leaf('b', 3));
        assert_eq!(node.weight(), 5);
        assert!(!node.is_leaf());
        assert_eq!(node.symbol(), None);
        assert_eq!(node.num_leafs(), 2);
        assert_eq!(node.height(), 1);
    }

    #[test]
    fn debug_format() {
        let node = Node::merge(Node::leaf('a', 1), Node::leaf('b', 1));
        assert_eq!(format!("{:?}", node), "(2, ('a', 1), ('b', 1))");
    }
}
