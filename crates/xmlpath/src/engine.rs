//! Evaluates path expressions against any `TreeNode`.
//!
//! Resolution is a single left-to-right pass over the segments. Every miss makes the
//! whole path absent; nothing here returns an error or panics on a non-matching path.
use crate::ast::{PathExpression, PathSegment};
use crate::datasource::TreeNode;
use std::borrow::Cow;

/// The state of a resolution after consuming a segment.
#[derive(Debug, Clone, Copy)]
enum Cursor<'a, N> {
    Element(N),
    Attribute(&'a str),
    Absent,
}

/// Parses `path` and resolves it against `root`. A path that does not parse
/// resolves to `None`.
pub fn resolve<'a, N: TreeNode<'a>>(root: N, path: &str) -> Option<Cow<'a, str>> {
    match PathExpression::parse(path) {
        Ok(expr) => resolve_path(root, &expr),
        Err(e) => {
            log::debug!("Path '{}' resolves to absent: {}", path, e);
            None
        }
    }
}

/// Resolves a pre-parsed expression against `root`, returning the text of the
/// element reached or the attribute value read. Attribute values and single text
/// runs are borrowed from the tree.
pub fn resolve_path<'a, N: TreeNode<'a>>(
    root: N,
    path: &PathExpression,
) -> Option<Cow<'a, str>> {
    let scope = Scope::of(root);
    let mut cursor = Cursor::Element(root);

    for (position, segment) in path.segments().iter().enumerate() {
        let Cursor::Element(node) = cursor else {
            break;
        };
        cursor = scope.step(node, segment, position);
    }

    match cursor {
        Cursor::Element(node) => node.text(),
        Cursor::Attribute(value) => Some(Cow::Borrowed(value)),
        Cursor::Absent => None,
    }
}

/// What is known about the root, captured once per evaluation.
struct Scope<'a> {
    namespace: Option<&'a str>,
    root_name: &'a str,
}

impl<'a> Scope<'a> {
    fn of<N: TreeNode<'a>>(root: N) -> Self {
        let name = root.name();
        Self {
            namespace: name.namespace,
            root_name: name.local_part,
        }
    }

    fn step<N: TreeNode<'a>>(
        &self,
        node: N,
        segment: &PathSegment,
        position: usize,
    ) -> Cursor<'a, N> {
        match segment {
            PathSegment::Attribute(name) => {
                node.attribute(name).map_or(Cursor::Absent, Cursor::Attribute)
            }
            PathSegment::Predicate {
                element,
                attribute,
                value,
            } => self
                .find_child(node, element, |child| {
                    child.attribute(attribute) == Some(value.as_str())
                })
                .map_or(Cursor::Absent, Cursor::Element),
            // A leading segment may spell out the root's own name.
            PathSegment::Child(name) if position == 0 && name == self.root_name => {
                Cursor::Element(node)
            }
            PathSegment::Child(name) => self
                .find_child(node, name, |_| true)
                .map_or(Cursor::Absent, Cursor::Element),
        }
    }

    /// First child named `local` that satisfies `accept`. Candidates are the children in
    /// the root's namespace when at least one exists, otherwise the un-namespaced ones.
    fn find_child<N, F>(&self, node: N, local: &str, accept: F) -> Option<N>
    where
        N: TreeNode<'a>,
        F: Fn(&N) -> bool,
    {
        if let Some(ns) = self.namespace {
            let mut qualified = node
                .children()
                .filter(|child| child.name().matches(Some(ns), local))
                .peekable();
            if qualified.peek().is_some() {
                return qualified.find(|child| accept(child));
            }
        }
        node.children()
            .find(|child| child.name().matches(None, local) && accept(child))
    }
}
