//! NodeArena query methods.
//!
//! Tokens own their leading trivia, so most questions about comments and
//! layout reduce to "which token comes first" and "what text precedes it".

use ts2js_scanner::SyntaxKind;

use super::{NodeArena, NodeFlags, NodeIndex, NodeKind};

impl NodeArena {
    /// First leaf (token or synthetic text) of `node` in document order.
    pub fn first_token(&self, mut node: NodeIndex) -> NodeIndex {
        while let Some(&first) = self.children(node).first() {
            node = first;
        }
        node
    }

    /// Last leaf of `node` in document order.
    pub fn last_token(&self, mut node: NodeIndex) -> NodeIndex {
        while let Some(&last) = self.children(node).last() {
            node = last;
        }
        node
    }

    /// First direct child of the given kind.
    pub fn child_of_kind(&self, node: NodeIndex, kind: NodeKind) -> Option<NodeIndex> {
        self.children(node)
            .iter()
            .copied()
            .find(|&child| self.kind(child) == Some(kind))
    }

    pub fn has_token_child(&self, node: NodeIndex, kind: SyntaxKind) -> bool {
        self.child_of_kind(node, NodeKind::Token(kind)).is_some()
    }

    #[inline]
    pub fn is_token_of(&self, node: NodeIndex, kind: SyntaxKind) -> bool {
        self.kind(node) == Some(NodeKind::Token(kind))
    }

    /// Leading trivia of a leaf: the transform's override when present,
    /// otherwise the original text in front of the token.
    pub fn leading_trivia<'a>(&'a self, source: &'a str, token: NodeIndex) -> &'a str {
        let Some(node) = self.get(token) else {
            return "";
        };
        match &node.leading_trivia {
            Some(trivia) => trivia,
            None if node.flags.contains(NodeFlags::SYNTHETIC) => "",
            None => source.get(node.pos as usize..node.start as usize).unwrap_or(""),
        }
    }

    /// Original text of `node` without its leading trivia.
    pub fn node_text<'a>(&self, source: &'a str, node: NodeIndex) -> &'a str {
        self.get(node)
            .and_then(|n| source.get(n.start as usize..n.end as usize))
            .unwrap_or("")
    }

    /// Text of an `Identifier` or `PrivateIdentifier` leaf.
    pub fn identifier_text<'a>(&self, source: &'a str, node: NodeIndex) -> Option<&'a str> {
        match self.kind(node)? {
            NodeKind::Token(SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier) => {
                Some(self.node_text(source, node))
            }
            _ => None,
        }
    }

    /// Mark `node` as needing regeneration.
    pub fn mark_dirty(&mut self, node: NodeIndex) {
        if let Some(n) = self.get_mut(node) {
            n.flags |= NodeFlags::DIRTY;
        }
    }

    /// Number of nodes of `kind` reachable from `root`.
    pub fn count_kind(&self, root: NodeIndex, kind: NodeKind) -> usize {
        let mut count = 0;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if self.kind(node) == Some(kind) {
                count += 1;
            }
            stack.extend(self.children(node).iter().copied());
        }
        count
    }

    /// Nodes reachable from `root`, in document order.
    pub fn descendants(&self, root: NodeIndex) -> Vec<NodeIndex> {
        let mut result = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            result.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        result
    }
}
