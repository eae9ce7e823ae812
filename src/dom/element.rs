use std::any::Any;

use crate::dom::inheritance::Downcast;
use crate::dom::inheritance::private::{Sealed, SealedElement};
use crate::dom::node::{Node, NodeData};

/// The WebIDL `Element` capability. Every element is a [`Node`].
pub trait Element: Node + SealedElement {
    fn tag_name(&self) -> &str;

    fn local_name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    node: NodeData,
    tag_name: String,
    local_name: String,
}

impl HtmlElement {
    /// Names are fixed for the lifetime of the element. `nodeValue` starts
    /// absent.
    pub fn new(tag_name: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            node: NodeData::default(),
            tag_name: tag_name.into(),
            local_name: local_name.into(),
        }
    }
}

impl Node for HtmlElement {
    fn node_value(&self) -> Option<&str> {
        self.node.node_value()
    }

    fn set_node_value(&mut self, value: Option<String>) {
        self.node.set_node_value(value);
    }
}

impl Element for HtmlElement {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn local_name(&self) -> &str {
        &self.local_name
    }
}

impl Sealed for HtmlElement {
    fn as_any(&self) -> &(dyn Any + 'static) {
        self
    }

    fn as_any_mut(&mut self) -> &mut (dyn Any + 'static) {
        self
    }

    fn upcast(&self) -> &dyn Node {
        self
    }

    fn upcast_mut(&mut self) -> &mut dyn Node {
        self
    }

    fn as_element(&self) -> Option<&(dyn Element + 'static)> {
        Some(self)
    }

    fn as_element_mut(&mut self) -> Option<&mut (dyn Element + 'static)> {
        Some(self)
    }

    fn into_element(self: Box<Self>) -> Result<Box<dyn Element>, Box<dyn Node>> {
        Ok(self)
    }
}

impl SealedElement for HtmlElement {}

impl Downcast for HtmlElement {
    fn downcast_ref(node: &dyn Node) -> Option<&Self> {
        node.as_any().downcast_ref()
    }

    fn downcast_mut(node: &mut dyn Node) -> Option<&mut Self> {
        node.as_any_mut().downcast_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_kept_apart() {
        let element = HtmlElement::new("SVG:RECT", "rect");
        assert_eq!(element.tag_name(), "SVG:RECT");
        assert_eq!(element.local_name(), "rect");
        assert_eq!(element.node_value_pair(), ("", false));
    }

    #[test]
    fn element_hooks_agree_on_element_hit() {
        let mut element = HtmlElement::new("b", "b");
        assert_eq!(element.as_element().map(|e| e.tag_name()), Some("b"));
        assert!(element.as_element_mut().is_some());
        assert_eq!(Box::new(element).into_element().unwrap().local_name(), "b");
    }

    #[test]
    fn node_value_is_mutable() {
        let mut element = HtmlElement::new("div", "div");
        element.set_node_value_pair("x", true);
        assert_eq!(element.node_value_pair(), ("x", true));
        element.set_node_value(None);
        assert_eq!(element.node_value(), None);
        assert_eq!(element.tag_name(), "div");
    }
}
