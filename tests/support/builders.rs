// tests/support/builders.rs
use std::sync::Arc;

use periodical::{AuthorId, MagazineId, Registry, RegistryConfig};

use super::mocks::FixedClock;

/// Registry with a fixed clock and default configuration.
pub fn registry() -> Registry {
    Registry::with_clock(RegistryConfig::default(), Arc::new(FixedClock::default()))
}

pub fn registry_with_threshold(threshold: usize) -> Registry {
    Registry::with_clock(
        RegistryConfig::default().with_contributor_threshold(threshold),
        Arc::new(FixedClock::default()),
    )
}

/// Add `count` articles by `author` to `magazine` with generated titles.
pub fn publish_many(registry: &mut Registry, author: AuthorId, magazine: MagazineId, count: usize) {
    for n in 0..count {
        registry
            .add_article(author, magazine, format!("Article number {n}"))
            .expect("generated title should be valid");
    }
}
