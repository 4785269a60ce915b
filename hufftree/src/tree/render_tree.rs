use crate::tree::tree_node::Node;
use crate::Tree;
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Edge {
    from: usize,
    to: usize,
    transition: u8, // 0 or 1
}

#[derive(Debug, Clone)]
struct RenderNode {
    label: String,
    is_leaf: bool,
}

/// the tree flattened into numbered nodes, in depth first order
#[derive(Debug)]
struct RenderPlan {
    nodes: Vec<RenderNode>,
    edges: Vec<Edge>,
}

impl RenderPlan {
    fn new(tree: &Tree) -> Self {
        let mut plan = RenderPlan {
            nodes: vec![],
            edges: vec![],
        };
        plan.add(tree.root());
        plan
    }

    /// adds `node` and its children, returns the position of `node`
    fn add(&mut self, node: &Node) -> usize {
        let pos = self.nodes.len();
        let label = match node {
            Node::Leaf { symbol, weight } => format!("Cnt:{:?} Symbl:{:?}", weight, symbol),
            Node::Internal { weight, .. } => format!("Cnt:{:?}", weight),
        };
        self.nodes.push(RenderNode {
            label,
            is_leaf: node.is_leaf(),
        });
        if let Node::Internal { left, right, .. } = node {
            let left_pos = self.add(left);
            self.edges.push(Edge {
                from: pos,
                to: left_pos,
                transition: 0,
            });
            let right_pos = self.add(right);
            self.edges.push(Edge {
                from: pos,
                to: right_pos,
                transition: 1,
            });
        }
        pos
    }
}

/// writes the tree in graphviz dot format
pub fn render_plan_to<W: core::fmt::Write>(
    graph: &Tree,
    output: &mut W,
) -> std::result::Result<(), core::fmt::Error> {
    dot::render(&RenderPlan::new(graph), output)
}

impl<'a> dot::Labeller<'a> for RenderPlan {
    type Node = usize;
    type Edge = Edge;
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &usize) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label<'b>(&'b self, n: &usize) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(self.nodes[*n].label.clone().into())
    }

    /// Adds attr to `n` that will be used in the rendered output.
    /// Multiple attr can be returned in the String, e.g. `color="red", fontcolor="red"`
    fn node_attr(&'a self, n: &Self::Node) -> Option<String> {
        let out = if self.nodes[*n].is_leaf {
            "color=dodgerblue4 fontcolor=dodgerblue4 ".to_string()
        } else {
            "color=azure4 fontcolor=azure4 ".to_string()
        };
        Some(out)
    }

    fn edge_label<'b>(&'b self, ed: &Edge) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a> dot::GraphWalk<'a> for RenderPlan {
    type Node = usize;
    type Edge = Edge;
    fn nodes(&self) -> dot::Nodes<usize> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&self) -> dot::Edges<Edge> {
        Cow::Borrowed(self.edges.as_slice())
    }

    fn source(&self, e: &Edge) -> usize {
        e.from
    }

    fn target(&self, e: &Edge) -> usize {
        e.to
    }
}
