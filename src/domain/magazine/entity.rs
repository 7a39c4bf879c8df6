// src/domain/magazine/entity.rs
use crate::domain::magazine::value_objects::{Category, MagazineId, MagazineName};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: MagazineName,
    category: Category,
}

impl Magazine {
    pub(crate) fn new(id: MagazineId, name: MagazineName, category: Category) -> Self {
        Self { id, name, category }
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &MagazineName {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn set_name(&mut self, name: MagazineName) {
        self.name = name;
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }
}
