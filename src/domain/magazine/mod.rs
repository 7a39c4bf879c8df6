pub mod entity;
pub mod value_objects;

pub use entity::Magazine;
pub use value_objects::{Category, MagazineId, MagazineName};
