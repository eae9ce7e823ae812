//! Sealing and checked downcasting for the [`Node`] / [`Element`] hierarchy.
//!
//! Both capabilities have a supertrait in a private module, so code outside
//! this crate can hold and use nodes but can never implement the traits:
//!
//! ```compile_fail
//! use webidl::dom::Node;
//!
//! #[derive(Debug)]
//! struct Impostor;
//!
//! impl Node for Impostor {
//!     fn node_value(&self) -> Option<&str> { None }
//!     fn set_node_value(&mut self, _: Option<String>) {}
//! }
//! ```
//!
//! Every downcast is checked. A miss is `None` (or [`NotAnElement`] for the
//! owned form), never a panic.

use std::fmt;

use tracing::trace;

use crate::dom::element::Element;
use crate::dom::node::Node;

/// private module for sealed traits.
pub(crate) mod private {
    use std::any::Any;

    use crate::dom::element::Element;
    use crate::dom::node::Node;

    /// Marker for [`Node`]. Also carries the hooks the checked downcasts are
    /// built on, so they stay invisible outside the crate.
    pub trait Sealed {
        fn as_any(&self) -> &(dyn Any + 'static);

        fn as_any_mut(&mut self) -> &mut (dyn Any + 'static);

        fn upcast(&self) -> &dyn Node;

        fn upcast_mut(&mut self) -> &mut dyn Node;

        fn as_element(&self) -> Option<&(dyn Element + 'static)>;

        fn as_element_mut(&mut self) -> Option<&mut (dyn Element + 'static)>;

        fn into_element(self: Box<Self>) -> Result<Box<dyn Element>, Box<dyn Node>>;
    }

    /// Marker for [`Element`].
    pub trait SealedElement {}
}

use private::Sealed;

/// Checked narrowing from `dyn Node` into `Self`.
///
/// Implemented for `dyn Element` and for every concrete node type in this
/// crate; sealed like the capabilities themselves.
pub trait Downcast: Sealed {
    fn downcast_ref(node: &dyn Node) -> Option<&Self>;

    fn downcast_mut(node: &mut dyn Node) -> Option<&mut Self>;
}

impl Downcast for dyn Element {
    fn downcast_ref(node: &dyn Node) -> Option<&Self> {
        node.as_element()
    }

    fn downcast_mut(node: &mut dyn Node) -> Option<&mut Self> {
        node.as_element_mut()
    }
}

impl<'a> dyn Node + 'a {
    pub fn downcast_ref<T: Downcast + ?Sized>(&self) -> Option<&T> {
        let res = T::downcast_ref(self);
        if res.is_none() {
            trace!(target_type = std::any::type_name::<T>(), "downcast miss");
        }
        res
    }

    pub fn downcast_mut<T: Downcast + ?Sized>(&mut self) -> Option<&mut T> {
        let res = T::downcast_mut(self);
        if res.is_none() {
            trace!(target_type = std::any::type_name::<T>(), "downcast miss");
        }
        res
    }

    pub fn is<T: Downcast + ?Sized>(&self) -> bool {
        T::downcast_ref(self).is_some()
    }
}

impl<'a> dyn Element + 'a {
    pub fn as_node(&self) -> &dyn Node {
        self.upcast()
    }

    pub fn as_node_mut(&mut self) -> &mut dyn Node {
        self.upcast_mut()
    }
}

/// Returned by [`try_into_element`] when the node is not an [`Element`].
/// Gives the node back untouched.
pub struct NotAnElement(pub Box<dyn Node>);

impl NotAnElement {
    pub fn into_inner(self) -> Box<dyn Node> {
        self.0
    }
}

impl fmt::Debug for NotAnElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotAnElement").field(&self.0).finish()
    }
}

impl fmt::Display for NotAnElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node does not satisfy Element")
    }
}

impl std::error::Error for NotAnElement {}

/// Owned checked downcast from `Box<dyn Node>` to `Box<dyn Element>`.
pub fn try_into_element(node: Box<dyn Node>) -> Result<Box<dyn Element>, NotAnElement> {
    node.into_element().map_err(|node| {
        trace!("into_element miss");
        NotAnElement(node)
    })
}
