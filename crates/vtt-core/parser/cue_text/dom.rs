//! Conceptual DOM projection of cue markup trees
//!
//! Maps the markup tree onto generic fragment, text, processing instruction
//! and element nodes without depending on any rendering engine. The mapping
//! walks the tree with an explicit stack so nesting depth is bounded only by
//! memory.
//!
//! | Node        | DOM                                              |
//! |-------------|--------------------------------------------------|
//! | root        | `DocumentFragment`                               |
//! | text        | `Text`                                           |
//! | timestamp   | `ProcessingInstruction` with target `timestamp`  |
//! | c/i/b/u     | `span`/`i`/`b`/`u` element                       |
//! | ruby/rt     | `ruby`/`rt` element                              |
//! | v           | `span` with class `voice` and a `title`          |
//! | lang        | `span` with a `lang` attribute                   |

use super::node::{CueTextTree, NodeId, NodeKind};
use crate::utils::hashers::{create_hash_map_with_capacity, FastHashMap};

/// Renderer-agnostic DOM node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "nodeType"))]
pub enum DomNode {
    /// Container for the top-level nodes of a cue
    DocumentFragment {
        /// Top-level nodes
        children: Vec<DomNode>,
    },

    /// Text content
    Text {
        /// Text of the node
        #[cfg_attr(feature = "serde", serde(rename = "textContent"))]
        text: String,
    },

    /// Inline timestamp marker
    ProcessingInstruction {
        /// Always `timestamp`
        target: String,
        /// Timestamp in seconds
        data: f64,
    },

    /// Element with attributes
    Element {
        /// Element name such as `span` or `ruby`
        #[cfg_attr(feature = "serde", serde(rename = "tagName"))]
        tag_name: String,
        /// Attribute map, without an empty `class`
        attributes: FastHashMap<String, String>,
        /// Child nodes
        children: Vec<DomNode>,
    },
}

impl DomNode {
    /// Child nodes of fragments and elements
    #[must_use]
    pub fn children(&self) -> &[DomNode] {
        match self {
            Self::DocumentFragment { children } | Self::Element { children, .. } => children,
            Self::Text { .. } | Self::ProcessingInstruction { .. } => &[],
        }
    }

    /// Element name, `None` for non-element nodes
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    /// Attribute value of an element
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Concatenated text of all descendant text nodes
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut output = String::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if let Self::Text { text } = node {
                output.push_str(text);
            }
            stack.extend(node.children().iter().rev());
        }

        output
    }
}

/// Pending element whose children are still being converted
struct Frame {
    id: NodeId,
    next_child: usize,
    children: Vec<DomNode>,
}

impl Frame {
    fn new(id: NodeId, capacity: usize) -> Self {
        Self {
            id,
            next_child: 0,
            children: Vec::with_capacity(capacity),
        }
    }
}

/// Build the conceptual DOM for a markup tree
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::cue_text::{build_dom, parse_cue_text, DomNode};
///
/// let dom = build_dom(&parse_cue_text("<v.loud Esme>Hi</v>"));
/// let span = &dom.children()[0];
/// assert_eq!(span.tag_name(), Some("span"));
/// assert_eq!(span.attribute("class"), Some("voice loud"));
/// assert_eq!(span.attribute("title"), Some("Esme"));
/// assert_eq!(dom.text_content(), "Hi");
/// ```
#[must_use]
pub fn build_dom(tree: &CueTextTree) -> DomNode {
    let root = tree.root();
    let mut stack = vec![Frame::new(root, tree.children(root).len())];

    while let Some(frame) = stack.last_mut() {
        let children = tree.children(frame.id);

        if let Some(&child) = children.get(frame.next_child) {
            frame.next_child += 1;
            let grandchildren = tree.children(child).len();
            match &tree[child].kind {
                NodeKind::Text(text) => frame.children.push(DomNode::Text { text: text.clone() }),
                NodeKind::Timestamp(seconds) => frame.children.push(timestamp(*seconds)),
                _ => stack.push(Frame::new(child, grandchildren)),
            }
            continue;
        }

        let Some(done) = stack.pop() else { break };
        let node = convert(tree, done.id, done.children);
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => return node,
        }
    }

    DomNode::DocumentFragment {
        children: Vec::new(),
    }
}

fn timestamp(seconds: f64) -> DomNode {
    DomNode::ProcessingInstruction {
        target: "timestamp".to_string(),
        data: seconds,
    }
}

fn convert(tree: &CueTextTree, id: NodeId, children: Vec<DomNode>) -> DomNode {
    let node = &tree[id];
    let classes = node.classes.join(" ");

    let (tag_name, class, extra) = match &node.kind {
        NodeKind::Root => return DomNode::DocumentFragment { children },
        NodeKind::Text(text) => return DomNode::Text { text: text.clone() },
        NodeKind::Timestamp(seconds) => return timestamp(*seconds),
        NodeKind::Class => ("span", classes, None),
        NodeKind::Italic => ("i", classes, None),
        NodeKind::Bold => ("b", classes, None),
        NodeKind::Underline => ("u", classes, None),
        NodeKind::Ruby => ("ruby", classes, None),
        NodeKind::RubyText => ("rt", classes, None),
        NodeKind::Voice(name) => {
            let class = if classes.is_empty() {
                "voice".to_string()
            } else {
                format!("voice {classes}")
            };
            ("span", class, Some(("title", name)))
        }
        NodeKind::Lang(language) => ("span", classes, Some(("lang", language))),
    };

    let mut attributes = create_hash_map_with_capacity(2);
    if !class.is_empty() {
        attributes.insert("class".to_string(), class);
    }
    if let Some((name, value)) = extra {
        attributes.insert(name.to_string(), value.clone());
    }

    DomNode::Element {
        tag_name: tag_name.to_string(),
        attributes,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::cue_text::parse_cue_text;

    #[test]
    fn empty_tree_is_empty_fragment() {
        let dom = build_dom(&CueTextTree::new());
        assert_eq!(dom, DomNode::DocumentFragment { children: Vec::new() });
    }

    #[test]
    fn element_names() {
        let dom = build_dom(&parse_cue_text(
            "<c>a</c><i>b</i><b>c</b><u>d</u><ruby>e<rt>f</rt></ruby>",
        ));
        let names: Vec<_> = dom.children().iter().filter_map(DomNode::tag_name).collect();
        assert_eq!(names, vec!["span", "i", "b", "u", "ruby"]);
        assert_eq!(dom.children()[4].children()[1].tag_name(), Some("rt"));
    }

    #[test]
    fn empty_class_attribute_is_omitted() {
        let dom = build_dom(&parse_cue_text("<b>x</b>"));
        assert_eq!(dom.children()[0].attribute("class"), None);

        let dom = build_dom(&parse_cue_text("<c.a.b>x</c>"));
        assert_eq!(dom.children()[0].attribute("class"), Some("a b"));
    }

    #[test]
    fn voice_without_classes_gets_voice_class() {
        let dom = build_dom(&parse_cue_text("<v Bob>x"));
        let span = &dom.children()[0];
        assert_eq!(span.attribute("class"), Some("voice"));
        assert_eq!(span.attribute("title"), Some("Bob"));
    }

    #[test]
    fn lang_gets_lang_attribute() {
        let dom = build_dom(&parse_cue_text("<lang.x fr>bonjour</lang>"));
        let span = &dom.children()[0];
        assert_eq!(span.tag_name(), Some("span"));
        assert_eq!(span.attribute("lang"), Some("fr"));
        assert_eq!(span.attribute("class"), Some("x"));
    }

    #[test]
    fn timestamp_becomes_processing_instruction() {
        let dom = build_dom(&parse_cue_text("a<00:02.000>b"));
        assert_eq!(
            dom.children()[1],
            DomNode::ProcessingInstruction {
                target: "timestamp".to_string(),
                data: 2.0
            }
        );
        assert_eq!(dom.text_content(), "ab");
    }

    #[test]
    fn nested_order_is_preserved() {
        let dom = build_dom(&parse_cue_text("x<i>y<b>z</b>w</i>v"));
        assert_eq!(dom.text_content(), "xyzwv");
        let italic = &dom.children()[1];
        assert_eq!(italic.children().len(), 3);
        assert_eq!(italic.children()[1].tag_name(), Some("b"));
    }

    #[test]
    fn deep_tree_is_built_iteratively() {
        let depth = 20_000;
        let tree = parse_cue_text(&format!("{}x", "<i>".repeat(depth)));
        let dom = build_dom(&tree);

        let mut level = 0;
        let mut node = &dom;
        while let Some(child) = node.children().first() {
            node = child;
            level += 1;
        }
        assert_eq!(level, depth + 1);
        assert_eq!(dom.text_content(), "x");
        // Drop glue recurses once per level
        core::mem::forget(dom);
    }
}
