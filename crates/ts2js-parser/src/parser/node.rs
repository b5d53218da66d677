//! Arena-allocated concrete syntax tree nodes.
//!
//! Nodes live in a `NodeArena` and refer to each other by `NodeIndex`.
//! Tokens are leaves whose full span `[pos, end)` includes their leading
//! trivia; a composite node's full span is the concatenation of its
//! children's full spans.

use std::ops::{Index, IndexMut};

use bitflags::bitflags;
use smallvec::SmallVec;
use ts2js_common::limits;
use ts2js_scanner::SyntaxKind;

use super::NodeKind;

/// Index of a node in a `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

/// Ordered children of a node.
pub type NodeList = SmallVec<[NodeIndex; 4]>;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct NodeFlags: u8 {
        /// Children were altered; print from children instead of the source span.
        const DIRTY = 1 << 0;
        /// Created by a transform; `text` holds its output.
        const SYNTHETIC = 1 << 1;
        /// Runtime-bearing TS syntax rewritten into plain JavaScript.
        const LOWERED = 1 << 2;
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub flags: NodeFlags,
    /// Full start, including leading trivia.
    pub pos: u32,
    /// First significant character.
    pub start: u32,
    pub end: u32,
    pub children: NodeList,
    /// Replacement for the source trivia in front of this leaf.
    pub leading_trivia: Option<Box<str>>,
    /// Output of a synthetic node.
    pub text: Option<Box<str>>,
}

impl Node {
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.flags.contains(NodeFlags::DIRTY)
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.flags.contains(NodeFlags::SYNTHETIC)
    }

    #[inline]
    pub fn token(&self) -> Option<SyntaxKind> {
        self.kind.token()
    }
}

#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arena sized for a source text of `source_len` bytes.
    pub fn with_source_capacity(source_len: usize) -> Self {
        let estimate = (source_len / limits::NODES_PER_SOURCE_BYTE_DIVISOR).min(limits::MAX_NODE_PREALLOC);
        NodeArena {
            nodes: Vec::with_capacity(estimate),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0 as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_mut(index.0 as usize)
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<NodeKind> {
        self.get(index).map(|node| node.kind)
    }

    #[inline]
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.get(index).map_or(&[], |node| node.children.as_slice())
    }

    /// Drop nodes allocated after `len` (speculative parsing).
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    fn push(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        index
    }

    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, start: u32, end: u32) -> NodeIndex {
        self.push(Node {
            kind: NodeKind::Token(kind),
            flags: NodeFlags::empty(),
            pos,
            start,
            end,
            children: NodeList::new(),
            leading_trivia: None,
            text: None,
        })
    }

    /// Add a composite node spanning its children. `children` must not be empty.
    pub fn add_node(&mut self, kind: NodeKind, children: NodeList) -> NodeIndex {
        let (pos, start) = children
            .first()
            .and_then(|&first| self.get(first))
            .map_or((0, 0), |first| (first.pos, first.start));
        let end = children
            .last()
            .and_then(|&last| self.get(last))
            .map_or(pos, |last| last.end);
        self.push(Node {
            kind,
            flags: NodeFlags::empty(),
            pos,
            start,
            end,
            children,
            leading_trivia: None,
            text: None,
        })
    }

    /// Add transform output. `anchor` is the source offset the text replaces
    /// or is inserted at.
    pub fn add_synthetic(&mut self, text: impl Into<Box<str>>, anchor: u32) -> NodeIndex {
        self.push(Node {
            kind: NodeKind::SyntheticText,
            flags: NodeFlags::SYNTHETIC,
            pos: anchor,
            start: anchor,
            end: anchor,
            children: NodeList::new(),
            leading_trivia: None,
            text: Some(text.into()),
        })
    }

    /// Composite node created by a transform around existing children.
    pub fn add_dirty_node(&mut self, kind: NodeKind, children: NodeList) -> NodeIndex {
        let index = self.add_node(kind, children);
        self[index].flags |= NodeFlags::DIRTY;
        index
    }
}

impl Index<NodeIndex> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0 as usize]
    }
}

impl IndexMut<NodeIndex> for NodeArena {
    #[inline]
    fn index_mut(&mut self, index: NodeIndex) -> &mut Node {
        &mut self.nodes[index.0 as usize]
    }
}
