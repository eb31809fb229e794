//! Typed document tree
//!
//! Every node is built while its element is open and never changes after
//! the closing tag has been consumed.

pub mod core;
pub mod elements;
pub mod lists;

// Re-export commonly used types
pub use self::core::*;
pub use self::elements::*;
pub use self::lists::*;
