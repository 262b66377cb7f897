//! Defines the read-only element tree the path engine walks.
use std::borrow::Cow;
use std::fmt;

mod xml;

pub use xml::XmlDocument;

/// A qualified element name: an optional namespace URI and a local part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName<'a> {
    pub namespace: Option<&'a str>,
    pub local_part: &'a str,
}

impl<'a> QName<'a> {
    pub fn new(namespace: Option<&'a str>, local_part: &'a str) -> Self {
        Self {
            namespace,
            local_part,
        }
    }

    /// True when both the namespace (or its absence) and the local part agree.
    pub fn matches(&self, namespace: Option<&str>, local_part: &str) -> bool {
        self.namespace == namespace && self.local_part == local_part
    }
}

impl fmt::Display for QName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_part),
            None => f.write_str(self.local_part),
        }
    }
}

/// The contract for an element in a read-only XML tree.
///
/// The path engine is written exclusively against this trait. `'a` is the lifetime
/// of the underlying tree, and every string handed out borrows from it.
pub trait TreeNode<'a>: Copy + fmt::Debug {
    /// The element's qualified name.
    fn name(&self) -> QName<'a>;

    /// Element children in document order. Text, comments, and processing
    /// instructions are not included.
    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The value of an un-namespaced attribute.
    fn attribute(&self, name: &str) -> Option<&'a str>;

    /// The text directly inside the element, up to its first child element.
    /// Comments and processing instructions are skipped, so text runs they split are
    /// joined. `None` when no text precedes the first child element.
    fn text(&self) -> Option<Cow<'a, str>>;
}

// Test utilities - publicly available for integration testing in downstream crates
pub mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct MockNodeData {
        namespace: Option<String>,
        local_part: String,
        attributes: Vec<(String, String)>,
        text: Option<String>,
        children: Vec<usize>,
    }

    /// An in-memory element tree, built by hand, for exercising the engine without XML.
    #[derive(Debug, Default)]
    pub struct MockTree {
        nodes: Vec<MockNodeData>,
    }

    #[derive(Debug, Clone, Copy)]
    pub struct MockNode<'a> {
        pub id: usize,
        pub tree: &'a MockTree,
    }

    /// Splits Clark notation (`{uri}local`) into its parts.
    fn split_clark(name: &str) -> (Option<String>, String) {
        match name.strip_prefix('{').and_then(|s| s.split_once('}')) {
            Some((ns, local)) => (Some(ns.to_string()), local.to_string()),
            None => (None, name.to_string()),
        }
    }

    impl MockTree {
        /// Creates a tree holding only a root element. `name` may use `{uri}local`.
        pub fn new(name: &str) -> Self {
            let mut tree = MockTree::default();
            tree.push(name);
            tree
        }

        fn push(&mut self, name: &str) -> usize {
            let (namespace, local_part) = split_clark(name);
            self.nodes.push(MockNodeData {
                namespace,
                local_part,
                attributes: Vec::new(),
                text: None,
                children: Vec::new(),
            });
            self.nodes.len() - 1
        }

        /// Appends a child element under `parent` and returns its id.
        pub fn add_element(&mut self, parent: usize, name: &str) -> usize {
            let id = self.push(name);
            self.nodes[parent].children.push(id);
            id
        }

        pub fn set_attribute(&mut self, id: usize, name: &str, value: &str) {
            self.nodes[id]
                .attributes
                .push((name.to_string(), value.to_string()));
        }

        pub fn set_text(&mut self, id: usize, text: &str) {
            self.nodes[id].text = Some(text.to_string());
        }

        pub fn root(&self) -> MockNode<'_> {
            self.node(0)
        }

        pub fn node(&self, id: usize) -> MockNode<'_> {
            MockNode { id, tree: self }
        }
    }

    impl<'a> TreeNode<'a> for MockNode<'a> {
        fn name(&self) -> QName<'a> {
            let tree = self.tree;
            let data = &tree.nodes[self.id];
            QName::new(data.namespace.as_deref(), &data.local_part)
        }

        fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree; // Re-borrow to help the lifetime checker
            Box::new(
                tree.nodes[self.id]
                    .children
                    .iter()
                    .map(move |&id| MockNode { id, tree }),
            )
        }

        fn attribute(&self, name: &str) -> Option<&'a str> {
            let tree = self.tree;
            tree.nodes[self.id]
                .attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }

        fn text(&self) -> Option<Cow<'a, str>> {
            let tree = self.tree;
            tree.nodes[self.id].text.as_deref().map(Cow::Borrowed)
        }
    }

    /// Creates a small load plan tree:
    /// <Plan>                                   <!-- id 0 -->
    ///   <LoadNumber>L-1</LoadNumber>           <!-- id 1 -->
    ///   <Stops>                                <!-- id 2 -->
    ///     <Stop type="pickup">                 <!-- id 3 -->
    ///       <StopNumber>1</StopNumber>         <!-- id 4 -->
    ///     </Stop>
    ///     <Stop type="drop">                   <!-- id 5 -->
    ///       <StopNumber>2</StopNumber>         <!-- id 6 -->
    ///     </Stop>
    ///   </Stops>
    /// </Plan>
    pub fn create_test_tree() -> MockTree {
        let mut tree = MockTree::new("Plan");
        let load = tree.add_element(0, "LoadNumber");
        tree.set_text(load, "L-1");
        let stops = tree.add_element(0, "Stops");
        for (kind, number) in [("pickup", "1"), ("drop", "2")] {
            let stop = tree.add_element(stops, "Stop");
            tree.set_attribute(stop, "type", kind);
            let stop_number = tree.add_element(stop, "StopNumber");
            tree.set_text(stop_number, number);
        }
        tree
    }

    #[test]
    fn test_mock_tree_navigation() {
        let tree = create_test_tree();
        let root = tree.root();
        assert_eq!(root.name(), QName::new(None, "Plan"));

        let names: Vec<_> = root.children().map(|c| c.name().local_part).collect();
        assert_eq!(names, vec!["LoadNumber", "Stops"]);

        let stop = tree.node(5);
        assert_eq!(stop.attribute("type"), Some("drop"));
        assert_eq!(stop.attribute("missing"), None);
        assert_eq!(stop.text(), None);
        assert_eq!(tree.node(1).text().as_deref(), Some("L-1"));
    }

    #[test]
    fn test_clark_names() {
        let tree = MockTree::new("{urn:tms}Plan");
        assert_eq!(tree.root().name(), QName::new(Some("urn:tms"), "Plan"));
        assert_eq!(tree.root().name().to_string(), "{urn:tms}Plan");
    }
}
