use crate::ast::{Node, NodeType};

/// Cursor over the nodes of one file
///
/// Cloning gives an independent cursor over the same nodes.
#[derive(Debug, Clone)]
pub struct NodeIterator<'a> {
    nodes: &'a [Node],
    position: usize,
}

impl<'a> NodeIterator<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self { nodes, position: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.nodes.len()
    }

    /// The next node, without consuming it.
    pub fn spy_next(&self) -> Option<&'a Node> {
        self.nodes.get(self.position)
    }

    /// Nodes consumed so far, the current one last.
    pub fn consumed(&self) -> &'a [Node] {
        &self.nodes[..self.position]
    }

    /// Tags directly before the current node, in source order.
    pub fn preceding_tags(&self) -> Vec<Node> {
        let before_current = match self.consumed().split_last() {
            Some((_, before)) => before,
            None => return Vec::new(),
        };
        let first_tag = before_current
            .iter()
            .rposition(|node| node.node_type != NodeType::Tag)
            .map_or(0, |index| index + 1);
        before_current[first_tag..].to_vec()
    }

    /// Consumes the run of `node_type` nodes right after the current one.
    pub fn collect_forward(&mut self, node_type: NodeType) -> Vec<Node> {
        let mut collected = Vec::new();
        while let Some(node) = self.spy_next().filter(|node| node.node_type == node_type) {
            collected.push(node.clone());
            self.position += 1;
        }
        collected
    }
}

impl<'a> Iterator for NodeIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.position)?;
        self.position += 1;
        Some(node)
    }
}
