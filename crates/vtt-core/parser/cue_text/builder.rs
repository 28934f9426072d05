//! Node tree construction from cue text tokens
//!
//! The builder keeps an insertion point that starts at the root. Start tags
//! descend, end tags close the nearest enclosing node of the same kind along
//! with everything opened inside it, and unknown or unmatched tags leave the
//! insertion point alone. Content of ignored tags is still kept.

use super::node::{CueTextTree, NodeId, NodeKind, TagKind};
use crate::{
    parser::timestamp::parse_timestamp,
    tokenizer::{CueTextToken, CueTextTokenizer, StartTag},
};

/// Incremental builder consuming tokens one at a time
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    /// Tree under construction
    tree: CueTextTree,
    /// Node new children are appended to
    current: NodeId,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Create builder with an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: CueTextTree::new(),
            current: NodeId::ROOT,
        }
    }

    /// Current insertion point
    #[must_use]
    pub const fn insertion_point(&self) -> NodeId {
        self.current
    }

    /// Apply one token
    pub fn push(&mut self, token: CueTextToken) {
        match token {
            CueTextToken::Text(text) => {
                self.append(NodeKind::Text(text), Vec::new());
            }
            CueTextToken::Timestamp(raw) => {
                if let Some(seconds) = parse_timestamp(&raw) {
                    self.append(NodeKind::Timestamp(seconds), Vec::new());
                }
            }
            CueTextToken::StartTag(tag) => self.open(tag),
            CueTextToken::EndTag(name) => self.close(TagKind::from_name(&name)),
        }
    }

    /// Finish building and return the tree
    #[must_use]
    pub fn finish(self) -> CueTextTree {
        self.tree
    }

    fn open(&mut self, tag: StartTag) {
        let kind = TagKind::from_name(&tag.name);

        if kind == TagKind::RubyText && self.tree[self.current].kind != NodeKind::Ruby {
            return;
        }

        if let Some(node) = kind.open(tag.annotation.as_deref()) {
            if let Some(id) = self.append(node, tag.classes) {
                self.current = id;
            }
        }
    }

    fn close(&mut self, kind: TagKind) {
        if kind == TagKind::Passthrough {
            return;
        }

        let matched = self
            .tree
            .ancestors(self.current)
            .take_while(|id| !id.is_root())
            .find(|&id| self.tree[id].kind.tag_kind() == Some(kind));

        if let Some(parent) = matched.and_then(|id| self.tree.parent(id)) {
            self.current = parent;
        }
    }

    fn append(&mut self, kind: NodeKind, classes: Vec<String>) -> Option<NodeId> {
        self.tree.append(self.current, kind, classes)
    }
}

/// Parse a cue payload into its markup tree
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::cue_text::{parse_cue_text, NodeId, NodeKind};
///
/// let tree = parse_cue_text("<b><i>Text</b></i>");
/// let bold = tree.children(NodeId::ROOT)[0];
/// let italic = tree.children(bold)[0];
/// assert_eq!(tree[bold].kind, NodeKind::Bold);
/// assert_eq!(tree[italic].kind, NodeKind::Italic);
/// assert_eq!(tree[tree.children(italic)[0]].kind, NodeKind::Text("Text".to_string()));
/// assert_eq!(tree.len(), 4);
/// ```
#[must_use]
pub fn parse_cue_text(input: &str) -> CueTextTree {
    let mut builder = TreeBuilder::new();
    for token in CueTextTokenizer::new(input) {
        builder.push(token);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_under(tree: &CueTextTree, id: NodeId) -> Vec<NodeKind> {
        tree.children(id)
            .iter()
            .map(|&child| tree[child].kind.clone())
            .collect()
    }

    #[test]
    fn plain_text_is_single_child() {
        let tree = parse_cue_text("Hello");
        assert_eq!(
            kinds_under(&tree, NodeId::ROOT),
            vec![NodeKind::Text("Hello".to_string())]
        );
    }

    #[test]
    fn empty_payload_gives_bare_root() {
        assert!(parse_cue_text("").is_empty());
    }

    #[test]
    fn insertion_point_returns_to_root() {
        let mut builder = TreeBuilder::new();
        builder.push(CueTextToken::StartTag(StartTag::new("b")));
        assert_ne!(builder.insertion_point(), NodeId::ROOT);
        builder.push(CueTextToken::EndTag("b".to_string()));
        assert_eq!(builder.insertion_point(), NodeId::ROOT);
    }

    #[test]
    fn unknown_start_tag_keeps_content() {
        let tree = parse_cue_text("<span>inner</span>");
        assert_eq!(
            kinds_under(&tree, NodeId::ROOT),
            vec![NodeKind::Text("inner".to_string())]
        );
    }

    #[test]
    fn rt_outside_ruby_is_ignored() {
        let tree = parse_cue_text("<rt>x</rt>");
        assert_eq!(
            kinds_under(&tree, NodeId::ROOT),
            vec![NodeKind::Text("x".to_string())]
        );
    }

    #[test]
    fn rt_inside_ruby_nests() {
        let tree = parse_cue_text("<ruby>漢<rt>kan</rt></ruby>");
        let ruby = tree.children(NodeId::ROOT)[0];
        assert_eq!(
            kinds_under(&tree, ruby),
            vec![NodeKind::Text("漢".to_string()), NodeKind::RubyText]
        );
    }

    #[test]
    fn rt_must_be_direct_child_of_ruby() {
        let tree = parse_cue_text("<ruby><b><rt>x</rt></b></ruby>");
        let ruby = tree.children(NodeId::ROOT)[0];
        let bold = tree.children(ruby)[0];
        assert_eq!(
            kinds_under(&tree, bold),
            vec![NodeKind::Text("x".to_string())]
        );
    }

    #[test]
    fn end_tag_closes_intervening_nodes() {
        let tree = parse_cue_text("<b><i>Text</b>after");
        assert_eq!(
            kinds_under(&tree, NodeId::ROOT),
            vec![NodeKind::Bold, NodeKind::Text("after".to_string())]
        );
    }

    #[test]
    fn unmatched_end_tag_is_ignored() {
        let tree = parse_cue_text("<b>a</i>b</b>");
        let bold = tree.children(NodeId::ROOT)[0];
        assert_eq!(
            kinds_under(&tree, bold),
            vec![
                NodeKind::Text("a".to_string()),
                NodeKind::Text("b".to_string())
            ]
        );
    }

    #[test]
    fn nearest_enclosing_match_wins() {
        let tree = parse_cue_text("<b>1<b>2</b>3</b>4");
        let outer = tree.children(NodeId::ROOT)[0];
        assert_eq!(tree.children(NodeId::ROOT).len(), 2);
        assert_eq!(
            kinds_under(&tree, outer),
            vec![
                NodeKind::Text("1".to_string()),
                NodeKind::Bold,
                NodeKind::Text("3".to_string())
            ]
        );
    }

    #[test]
    fn voice_and_lang_carry_annotation_and_classes() {
        let tree = parse_cue_text("<v.loud Esme>Hi</v><lang en>x</lang>");
        let voice = tree.children(NodeId::ROOT)[0];
        let lang = tree.children(NodeId::ROOT)[1];
        assert_eq!(tree[voice].kind, NodeKind::Voice("Esme".to_string()));
        assert_eq!(tree[voice].classes, vec!["loud".to_string()]);
        assert_eq!(tree[lang].kind, NodeKind::Lang("en".to_string()));
    }

    #[test]
    fn voice_without_annotation_has_empty_name() {
        let tree = parse_cue_text("<v>x");
        let voice = tree.children(NodeId::ROOT)[0];
        assert_eq!(tree[voice].kind, NodeKind::Voice(String::new()));
    }

    #[test]
    fn timestamps_are_parsed_or_dropped() {
        let tree = parse_cue_text("a<00:00:01.500>b<1:2>c");
        assert_eq!(
            kinds_under(&tree, NodeId::ROOT),
            vec![
                NodeKind::Text("a".to_string()),
                NodeKind::Timestamp(1.5),
                NodeKind::Text("b".to_string()),
                NodeKind::Text("c".to_string()),
            ]
        );
    }

    #[test]
    fn unclosed_tags_stay_open_until_end() {
        let tree = parse_cue_text("<i>one<u>two");
        let italic = tree.children(NodeId::ROOT)[0];
        let underline = tree.children(italic)[1];
        assert_eq!(tree[underline].kind, NodeKind::Underline);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let depth = 50_000;
        let input = format!("{}x{}", "<b>".repeat(depth), "</b>".repeat(depth));
        let tree = parse_cue_text(&input);
        assert_eq!(tree.depth(), depth + 1);
        assert_eq!(tree.text_content(), "x");
    }
}
