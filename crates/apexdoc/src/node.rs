use crate::toc::Node;

/// Borrowed view of a table-of-contents node together with the node it was
/// reached from.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
    parent: Option<&'a Node>,
}

impl<'a> NodeRef<'a> {
    pub fn new(node: &'a Node, parent: Option<&'a Node>) -> Self {
        Self { node, parent }
    }

    pub fn root(node: &'a Node) -> Self {
        Self::new(node, None)
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.parent.map(NodeRef::root)
    }

    /// Display text, used for matching.
    pub fn name(&self) -> &'a str {
        &self.node.text
    }

    pub fn href(&self) -> Option<&'a str> {
        self.node.href()
    }

    /// Direct children, each remembering this node as its parent.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let parent = self.node;
        parent
            .children
            .iter()
            .map(move |child| NodeRef::new(child, Some(parent)))
    }

    /// Members of a class node: the children of every category child, in
    /// document order. Each member's parent is this class, not the category.
    pub fn members(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let class = self.node;
        class
            .children
            .iter()
            .flat_map(|category| category.children.iter())
            .map(move |item| NodeRef::new(item, Some(class)))
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.node, other.node)
    }
}
