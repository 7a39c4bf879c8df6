// src/application/queries/mod.rs
//! Derived relationship queries.
//!
//! Nothing here is cached: each call scans the registry's current article
//! list, so reassignments are visible on the next call.

pub mod authors;
pub mod magazines;

pub use authors::AuthorView;
pub use magazines::MagazineView;
