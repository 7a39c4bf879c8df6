//! In-memory authors, magazines and the articles that relate them.
//!
//! A [`Registry`] owns every entity and hands out typed ids. Relationship
//! queries are answered by [`AuthorView`] and [`MagazineView`], which rescan
//! the registry's articles on every call.
//!
//! ```
//! use periodical::Registry;
//!
//! let mut registry = Registry::new();
//! let jane = registry.create_author("Jane")?;
//! let vogue = registry.create_magazine("Vogue", "Fashion")?;
//! registry.add_article(jane, vogue, "Spring Looks")?;
//!
//! let view = registry.author_view(jane)?;
//! assert_eq!(view.articles().len(), 1);
//! assert_eq!(registry.top_publisher().map(|m| m.id()), Some(vogue));
//! # Ok::<(), periodical::ValidationError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::Registry;
pub use application::ports::time::Clock;
pub use application::queries::{AuthorView, MagazineView};
pub use config::{ConfigError, RegistryConfig};
pub use domain::article::{Article, ArticleId, ArticleTitle};
pub use domain::author::{Author, AuthorId, AuthorName};
pub use domain::errors::{DomainResult, Field, ValidationError};
pub use domain::magazine::{Category, Magazine, MagazineId, MagazineName};
