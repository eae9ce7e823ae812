//! A sealed `Node` / `Element` hierarchy.
//!
//! Values are handed out as `Box<dyn Node>`; callers narrow them with
//! [`downcast_ref`](trait.Node.html#method.downcast_ref) or
//! [`try_into_element`].

mod element;
mod inheritance;
mod node;

pub use element::{Element, HtmlElement};
pub use inheritance::{Downcast, NotAnElement, try_into_element};
pub use node::{Comment, Node, NodeData};

/// Creates an element whose tag name and local name are both `local_name`.
pub fn create_element(local_name: &str) -> Box<dyn Node> {
    Box::new(HtmlElement::new(local_name, local_name))
}

pub fn create_element_ns(tag_name: &str, local_name: &str) -> Box<dyn Node> {
    Box::new(HtmlElement::new(tag_name, local_name))
}

pub fn create_comment(data: &str) -> Box<dyn Node> {
    Box::new(Comment::new(data))
}
