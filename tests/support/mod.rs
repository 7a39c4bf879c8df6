// tests/support/mod.rs
// Shared by several integration test binaries; each binary only uses part of
// it, so silence dead_code / unused_imports at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;
