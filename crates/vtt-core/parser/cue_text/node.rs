//! Arena-backed markup tree for cue payloads
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. The
//! root is always at index 0. Parent links exist only so the builder can walk
//! ancestors; the tree is otherwise strictly owned top-down.

use core::ops::Index;

/// Index of a node inside a [`CueTextTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(usize);

impl NodeId {
    /// Identifier of the root node of every tree
    pub const ROOT: Self = Self(0);

    /// Position of the node in the arena
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Check if this is the root node
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

/// Markup tag kinds recognized in cue text
///
/// Tag names map to kinds through a fixed table. Every other name maps to
/// [`TagKind::Passthrough`], whose start and end tags create no node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `c`
    Class,
    /// `i`
    Italic,
    /// `b`
    Bold,
    /// `u`
    Underline,
    /// `ruby`
    Ruby,
    /// `rt`
    RubyText,
    /// `v`
    Voice,
    /// `lang`
    Lang,
    /// Unknown tag name
    Passthrough,
}

impl TagKind {
    /// Map a tag name to its kind (case-sensitive)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vtt_core::parser::cue_text::TagKind;
    ///
    /// assert_eq!(TagKind::from_name("rt"), TagKind::RubyText);
    /// assert_eq!(TagKind::from_name("B"), TagKind::Passthrough);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "c" => Self::Class,
            "i" => Self::Italic,
            "b" => Self::Bold,
            "u" => Self::Underline,
            "ruby" => Self::Ruby,
            "rt" => Self::RubyText,
            "v" => Self::Voice,
            "lang" => Self::Lang,
            _ => Self::Passthrough,
        }
    }

    /// Canonical tag name, `None` for passthrough tags
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Class => Some("c"),
            Self::Italic => Some("i"),
            Self::Bold => Some("b"),
            Self::Underline => Some("u"),
            Self::Ruby => Some("ruby"),
            Self::RubyText => Some("rt"),
            Self::Voice => Some("v"),
            Self::Lang => Some("lang"),
            Self::Passthrough => None,
        }
    }

    /// Node kind created when this tag opens
    ///
    /// The annotation becomes the value of voice and lang nodes and is
    /// ignored otherwise.
    #[must_use]
    pub fn open(self, annotation: Option<&str>) -> Option<NodeKind> {
        let annotation = || annotation.unwrap_or_default().to_string();
        match self {
            Self::Class => Some(NodeKind::Class),
            Self::Italic => Some(NodeKind::Italic),
            Self::Bold => Some(NodeKind::Bold),
            Self::Underline => Some(NodeKind::Underline),
            Self::Ruby => Some(NodeKind::Ruby),
            Self::RubyText => Some(NodeKind::RubyText),
            Self::Voice => Some(NodeKind::Voice(annotation())),
            Self::Lang => Some(NodeKind::Lang(annotation())),
            Self::Passthrough => None,
        }
    }
}

/// Node payload
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum NodeKind {
    /// Tree root
    Root,
    /// Text run
    Text(String),
    /// Inline timestamp in seconds
    Timestamp(f64),
    /// `<c>` span
    Class,
    /// `<i>`
    Italic,
    /// `<b>`
    Bold,
    /// `<u>`
    Underline,
    /// `<ruby>`
    Ruby,
    /// `<rt>` inside ruby
    RubyText,
    /// `<v>` carrying the speaker name
    Voice(String),
    /// `<lang>` carrying the language tag
    Lang(String),
}

impl NodeKind {
    /// Tag kind that closes this node, `None` for root, text and timestamps
    #[must_use]
    pub const fn tag_kind(&self) -> Option<TagKind> {
        match self {
            Self::Class => Some(TagKind::Class),
            Self::Italic => Some(TagKind::Italic),
            Self::Bold => Some(TagKind::Bold),
            Self::Underline => Some(TagKind::Underline),
            Self::Ruby => Some(TagKind::Ruby),
            Self::RubyText => Some(TagKind::RubyText),
            Self::Voice(_) => Some(TagKind::Voice),
            Self::Lang(_) => Some(TagKind::Lang),
            Self::Root | Self::Text(_) | Self::Timestamp(_) => None,
        }
    }

    /// Check if the node can have children
    #[must_use]
    pub const fn is_container(&self) -> bool {
        !matches!(self, Self::Text(_) | Self::Timestamp(_))
    }
}

/// Single node of the markup tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    /// Node payload
    pub kind: NodeKind,

    /// Class names from the start tag, in order
    pub classes: Vec<String>,

    /// Parent node, `None` only for the root
    pub parent: Option<NodeId>,

    /// Child nodes in document order
    pub children: Vec<NodeId>,
}

impl Node {
    const fn new(kind: NodeKind, classes: Vec<String>, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            classes,
            parent,
            children: Vec::new(),
        }
    }
}

/// Markup tree of one cue payload
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::cue_text::{parse_cue_text, NodeId, NodeKind};
///
/// let tree = parse_cue_text("<i>Hi</i>");
/// let italic = tree.children(NodeId::ROOT)[0];
/// assert_eq!(tree[italic].kind, NodeKind::Italic);
/// assert_eq!(tree.text_content(), "Hi");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CueTextTree {
    /// Arena of nodes, root first
    nodes: Vec<Node>,
}

impl Default for CueTextTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CueTextTree {
    /// Create tree holding only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root, Vec::new(), None)],
        }
    }

    /// Root node identifier
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Node by identifier
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Total number of nodes including the root
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the root
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Children of a node, empty for unknown identifiers
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Parent of a node
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Iterate from `id` up to and including the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(self.get(id).map(|_| id), move |&current| {
            self.parent(current)
        })
    }

    /// Iterate over every node with its identifier in arena order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Append a node under `parent` and return its identifier
    ///
    /// Returns `None` if `parent` is not part of this tree or cannot have
    /// children.
    pub fn append(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        classes: Vec<String>,
    ) -> Option<NodeId> {
        if !self.get(parent)?.kind.is_container() {
            return None;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind, classes, Some(parent)));
        self.nodes[parent.0].children.push(id);
        Some(id)
    }

    /// Depth of the deepest node, 0 for a tree holding only the root
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate().skip(1) {
            // Parents are always appended before their children
            depths[index] = node.parent.map_or(0, |parent| depths[parent.0] + 1);
        }
        depths.into_iter().max().unwrap_or(0)
    }

    /// Concatenated text of all text nodes in document order
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut output = String::new();
        let mut stack = vec![NodeId::ROOT];

        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            if let NodeKind::Text(text) = &node.kind {
                output.push_str(text);
            }
            stack.extend(node.children.iter().rev());
        }

        output
    }
}

impl Index<NodeId> for CueTextTree {
    type Output = Node;

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
