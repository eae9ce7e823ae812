use std::any::Any;
use std::fmt;

use crate::dom::element::Element;
use crate::dom::inheritance::Downcast;
use crate::dom::inheritance::private::Sealed;

/// The WebIDL `Node` capability.
///
/// `nodeValue` is nullable, so it has three observable states: absent
/// (`None`), present but empty (`Some("")`) and present with text.
pub trait Node: Sealed + fmt::Debug {
    fn node_value(&self) -> Option<&str>;

    fn set_node_value(&mut self, value: Option<String>);

    /// `nodeValue` as a `(text, present)` pair. Absent reads as `("", false)`.
    fn node_value_pair(&self) -> (&str, bool) {
        match self.node_value() {
            Some(value) => (value, true),
            None => ("", false),
        }
    }

    /// Sets `nodeValue` from a `(text, present)` pair. `text` is ignored when
    /// `present` is false.
    fn set_node_value_pair(&mut self, value: &str, present: bool) {
        self.set_node_value(present.then(|| value.to_string()));
    }
}

/// State shared by every concrete node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeData {
    node_value: Option<String>,
}

impl NodeData {
    pub fn new(node_value: Option<String>) -> Self {
        Self { node_value }
    }

    pub fn node_value(&self) -> Option<&str> {
        self.node_value.as_deref()
    }

    pub fn set_node_value(&mut self, value: Option<String>) {
        self.node_value = value;
    }
}

/// A node that is not an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    node: NodeData,
}

impl Comment {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            node: NodeData::new(Some(data.into())),
        }
    }
}

impl Node for Comment {
    fn node_value(&self) -> Option<&str> {
        self.node.node_value()
    }

    fn set_node_value(&mut self, value: Option<String>) {
        self.node.set_node_value(value);
    }
}

impl Sealed for Comment {
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
        None
    }

    fn as_element_mut(&mut self) -> Option<&mut (dyn Element + 'static)> {
        None
    }

    fn into_element(self: Box<Self>) -> Result<Box<dyn Element>, Box<dyn Node>> {
        Err(self)
    }
}

impl Downcast for Comment {
    fn downcast_ref(node: &dyn Node) -> Option<&Self> {
        node.as_any().downcast_ref()
    }

    fn downcast_mut(node: &mut dyn Node) -> Option<&mut Self> {
        node.as_any_mut().downcast_mut()
    }
}
