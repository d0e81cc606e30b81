#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod helpers;
mod parser;
mod query_string;
mod url_object;

// Public API
pub use query_string::QueryString;
pub use url_object::UrlObject;
