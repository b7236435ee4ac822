//! Arena-backed syntax trees and an identity-guarded walker
//!
//! Grammar output is copied into a flat arena so that every node has a stable
//! index. Nodes keep a back-reference to their parent; the walker never follows
//! that edge and never visits the same index twice, so trees that are linked
//! into cycles by hand still terminate.

use crate::errors::{ParserError, ParserResult};
use std::path::Path;
use tree_sitter::{Language, Parser, TreeCursor};

/// Index of a node inside its [`SyntaxTree`]
pub type NodeId = usize;

/// Pseudo-field naming the back-reference edge; skipped during traversal
pub const PARENT_FIELD: &str = "parent";

/// Pseudo-field naming the ordered child list
pub const CHILDREN_FIELD: &str = "children";

/// One node of a syntax tree
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    /// Grammar-specific discriminator
    pub kind: &'static str,
    pub named: bool,
    pub start_byte: usize,
    pub end_byte: usize,
    pub row: usize,
    pub column: usize,
    pub is_error: bool,
    pub is_missing: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    fields: Vec<(&'static str, NodeId)>,
}

impl SyntaxNode {
    fn bare(kind: &'static str, named: bool) -> Self {
        Self {
            kind,
            named,
            start_byte: 0,
            end_byte: 0,
            row: 0,
            column: 0,
            is_error: false,
            is_missing: false,
            parent: None,
            children: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Every outgoing edge as `(field, target)`, the parent edge last.
    ///
    /// Ordered children come first under [`CHILDREN_FIELD`], then named
    /// fields; a node reachable under both appears twice.
    pub fn edges(&self) -> impl Iterator<Item = (&'static str, NodeId)> + '_ {
        self.children
            .iter()
            .map(|&id| (CHILDREN_FIELD, id))
            .chain(self.fields.iter().copied())
            .chain(self.parent.map(|p| (PARENT_FIELD, p)))
    }
}

/// A parsed source file as a node arena
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    /// An empty tree holding `source`; nodes are added with
    /// [`SyntaxTree::push_node`] and [`SyntaxTree::attach`].
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            nodes: Vec::new(),
        }
    }

    /// Parse `source` with `language` and copy the result into an arena.
    ///
    /// Only grammar-level failures are errors here; a tree that contains
    /// error nodes is returned as-is and callers decide via
    /// [`SyntaxTree::check`].
    pub fn parse(language: &Language, source: &str, file_path: &Path) -> ParserResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .map_err(|e| ParserError::GrammarError(file_path.to_path_buf(), e.to_string()))?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            ParserError::GrammarError(file_path.to_path_buf(), "Failed to parse".to_string())
        })?;

        let mut arena = Self::new(source);
        arena.copy_from(&mut tree.walk());
        Ok(arena)
    }

    fn copy_from(&mut self, cursor: &mut TreeCursor) {
        let root = self.push_ts_node(cursor);
        let mut parents = vec![root];

        if !cursor.goto_first_child() {
            return;
        }

        loop {
            let Some(&parent) = parents.last() else {
                return;
            };
            let id = self.push_ts_node(cursor);
            self.attach(parent, cursor.field_name(), id);

            if cursor.goto_first_child() {
                parents.push(id);
                continue;
            }

            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    return;
                }
                parents.pop();
                if parents.is_empty() {
                    return;
                }
            }
        }
    }

    fn push_ts_node(&mut self, cursor: &TreeCursor) -> NodeId {
        let node = cursor.node();
        let start = node.start_position();
        let id = self.nodes.len();
        self.nodes.push(SyntaxNode {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            row: start.row,
            column: start.column,
            is_error: node.is_error(),
            is_missing: node.is_missing(),
            ..SyntaxNode::bare(node.kind(), node.is_named())
        });
        id
    }

    /// Add a detached node covering `start..end` of the source
    pub fn push_node(&mut self, kind: &'static str, start: usize, end: usize) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(SyntaxNode {
            start_byte: start,
            end_byte: end,
            ..SyntaxNode::bare(kind, true)
        });
        id
    }

    /// Make `child` an ordered child of `parent`, optionally under a field.
    ///
    /// The first attachment sets the child's parent; later attachments only
    /// add edges, which is how shared or cyclic links are expressed.
    pub fn attach(&mut self, parent: NodeId, field: Option<&'static str>, child: NodeId) {
        if self.nodes[child].parent.is_none() && child != parent {
            self.nodes[child].parent = Some(parent);
        }
        let node = &mut self.nodes[parent];
        node.children.push(child);
        if let Some(field) = field {
            node.fields.push((field, child));
        }
    }

    /// Root node; every tree built by [`SyntaxTree::parse`] has one
    pub fn root(&self) -> NodeId {
        0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id]
    }

    pub fn kind(&self, id: NodeId) -> &'static str {
        self.nodes[id].kind
    }

    /// Source text covered by the node (empty when out of range)
    pub fn text(&self, id: NodeId) -> &str {
        let node = &self.nodes[id];
        self.source.get(node.start_byte..node.end_byte).unwrap_or("")
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn named_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(move |&c| self.nodes[c].named)
    }

    /// First node stored under `field`; absent fields are `None`
    pub fn field(&self, id: NodeId, field: &str) -> Option<NodeId> {
        self.field_all(id, field).next()
    }

    /// Every node stored under `field`, in source order
    pub fn field_all<'a>(&'a self, id: NodeId, field: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.nodes[id]
            .fields
            .iter()
            .filter(move |(name, _)| *name == field)
            .map(|&(_, child)| child)
    }

    /// First direct child (named or not) of the given kind
    pub fn child_of_kind(&self, id: NodeId, kind: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.nodes[c].kind == kind)
    }

    /// Proper ancestors, nearest first
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// First error or missing node in source order, if any
    pub fn first_error(&self) -> Option<&SyntaxNode> {
        let mut found = None;
        if !self.is_empty() {
            self.walk(self.root(), |tree, id| {
                let node = tree.node(id);
                if found.is_none() && (node.is_error || node.is_missing) {
                    found = Some(id);
                }
            });
        }
        found.map(|id| self.node(id))
    }

    pub fn has_error(&self) -> bool {
        self.first_error().is_some()
    }

    /// Turn an error-bearing tree into a [`ParserError::SyntaxError`]
    pub fn check(&self, file_path: &Path) -> ParserResult<()> {
        match self.first_error() {
            None => Ok(()),
            Some(node) => Err(ParserError::SyntaxError(
                file_path.to_path_buf(),
                node.row + 1,
                node.column + 1,
                if node.is_missing {
                    format!("missing {}", node.kind)
                } else {
                    "unexpected input".to_string()
                },
            )),
        }
    }

    /// Pre-order traversal from `root`.
    ///
    /// `visit` runs once per reachable node. The parent edge is never
    /// followed and a node index already seen in this traversal is skipped.
    pub fn walk<F>(&self, root: NodeId, mut visit: F)
    where
        F: FnMut(&SyntaxTree, NodeId),
    {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let Some(seen) = visited.get_mut(id) else {
                continue;
            };
            if *seen {
                continue;
            }
            *seen = true;

            visit(self, id);

            let edges: Vec<NodeId> = self.nodes[id]
                .edges()
                .filter(|(field, _)| *field != PARENT_FIELD)
                .map(|(_, target)| target)
                .collect();
            stack.extend(edges.into_iter().rev());
        }
    }
}
