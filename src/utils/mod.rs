//! Utility functions and helpers.

pub mod http;
pub mod slug;
pub mod text;
pub mod url;

pub use self::slug::normalize;
pub use self::url::resolve;
