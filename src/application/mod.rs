pub mod ports;
pub mod queries;
pub mod registry;

pub use registry::Registry;
