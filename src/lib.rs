//! Rust renditions of two WebIDL binding patterns.
//!
//! - [`http::Headers`]: an ordered multimap with exact, case-sensitive name
//!   matching.
//! - [`dom`]: a sealed `Node` / `Element` hierarchy with checked downcasts.
//!
//! None of the types here lock internally. They are owned by one caller at a
//! time; share them across threads behind your own synchronisation.

pub mod dom;
pub mod http;
