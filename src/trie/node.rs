//! Trie node type

/// A node in the bit trie
///
/// The node at depth `d` stands for one `d`-bit string; `children[0]` and
/// `children[1]` extend it by a 0 or 1 bit. Nodes are created on demand
/// and never removed.
#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    pub children: [Option<Box<Node>>; 2],
    /// A key ending exactly here has been inserted or allocated
    pub terminal: bool,
}

impl Node {
    pub fn child(&self, bit: usize) -> Option<&Node> {
        self.children[bit].as_deref()
    }

    /// Get the child for `bit`, creating it if missing
    pub fn child_or_insert(&mut self, bit: usize) -> &mut Node {
        self.children[bit].get_or_insert_with(Box::default)
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}
