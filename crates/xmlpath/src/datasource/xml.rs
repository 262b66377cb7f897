// XML datasource implementation using roxmltree
use super::{QName, TreeNode};
use crate::engine;
use crate::error::XmlPathError;
use roxmltree::{Document, Node, ParsingOptions};
use std::borrow::Cow;

/// Wrapper around `roxmltree::Document` for one transformation run.
pub struct XmlDocument<'input> {
    doc: Document<'input>,
}

impl<'input> XmlDocument<'input> {
    /// Parses `text`. Surrounding whitespace is ignored and a DOCTYPE is accepted;
    /// malformed XML is an error.
    pub fn parse(text: &'input str) -> Result<Self, XmlPathError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text.trim(), options)?;
        Ok(Self { doc })
    }

    /// The document element, which is where path resolution starts.
    pub fn root_element(&self) -> Node<'_, 'input> {
        self.doc.root_element()
    }

    /// Resolves `path` against the document element.
    pub fn resolve(&self, path: &str) -> Option<Cow<'_, str>> {
        engine::resolve(self.root_element(), path)
    }
}

impl<'a, 'input: 'a> TreeNode<'a> for Node<'a, 'input> {
    fn name(&self) -> QName<'a> {
        let tag = self.tag_name();
        QName::new(tag.namespace(), tag.name())
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        Box::new(Node::children(self).filter(|n| n.is_element()))
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        Node::attribute(self, name)
    }

    fn text(&self) -> Option<Cow<'a, str>> {
        let mut runs = Node::children(self)
            .take_while(|n| !n.is_element())
            .filter(|n| n.is_text())
            .filter_map(|n| Node::text(&n));
        let first = runs.next()?;
        match runs.next() {
            None => Some(Cow::Borrowed(first)),
            Some(second) => {
                let mut joined = String::from(first);
                joined.push_str(second);
                joined.extend(runs);
                Some(Cow::Owned(joined))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_leading_whitespace() {
        let doc = XmlDocument::parse("\n  <?xml version=\"1.0\"?><Root/>\n").unwrap();
        assert_eq!(TreeNode::name(&doc.root_element()), QName::new(None, "Root"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = XmlDocument::parse("<Root><Open></Root>");
        assert!(matches!(result, Err(XmlPathError::XmlParse(_))));
    }

    #[test]
    fn test_children_skip_non_elements() {
        let doc = XmlDocument::parse("<R>lead<!-- c --><A/>mid<?pi x?><B/></R>").unwrap();
        let root = doc.root_element();
        let names: Vec<_> = TreeNode::children(&root)
            .map(|c| TreeNode::name(&c).local_part)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(TreeNode::text(&root).as_deref(), Some("lead"));
    }

    #[test]
    fn test_namespaced_names_and_attributes() {
        let doc =
            XmlDocument::parse(r#"<p:R xmlns:p="urn:x" id="7" p:id="8"><p:A/><A/></p:R>"#).unwrap();
        let root = doc.root_element();
        assert_eq!(TreeNode::name(&root), QName::new(Some("urn:x"), "R"));
        assert_eq!(TreeNode::attribute(&root, "id"), Some("7"));

        let names: Vec<_> = TreeNode::children(&root)
            .map(|c| TreeNode::name(&c))
            .collect();
        assert_eq!(
            names,
            vec![QName::new(Some("urn:x"), "A"), QName::new(None, "A")]
        );
    }

    #[test]
    fn test_parse_accepts_doctype() {
        let doc = XmlDocument::parse(
            "<?xml version=\"1.0\"?>\n<!DOCTYPE Plan [<!ENTITY carrier \"ACME\">]>\n<Plan><C>&carrier;</C></Plan>",
        )
        .unwrap();
        assert_eq!(doc.resolve("C").as_deref(), Some("ACME"));
    }

    #[test]
    fn test_text_skips_comments_and_pis() {
        let doc = XmlDocument::parse(
            "<R><E><!-- from yard -->53FT</E><P><?pi x?>v</P><S>a<!-- c -->b<?pi y?>c<X/>tail</S></R>",
        )
        .unwrap();
        assert_eq!(doc.resolve("E").as_deref(), Some("53FT"));
        assert_eq!(doc.resolve("P").as_deref(), Some("v"));
        assert_eq!(doc.resolve("S").as_deref(), Some("abc"));
    }

    #[test]
    fn test_text_absent_without_leading_text() {
        let doc = XmlDocument::parse("<R><A><!-- only --></A><B><X/>after</B><C></C></R>").unwrap();
        assert_eq!(doc.resolve("A"), None);
        assert_eq!(doc.resolve("B"), None);
        assert_eq!(doc.resolve("C"), None);
    }

    #[test]
    fn test_single_text_run_is_borrowed() {
        let doc = XmlDocument::parse("<R><A>one</A></R>").unwrap();
        assert!(matches!(doc.resolve("A"), Some(Cow::Borrowed("one"))));
    }
}
