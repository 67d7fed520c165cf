//! Parse results: entities, their values and where they were defined

pub mod entity;
pub mod geometry;
pub mod location_map;

pub use entity::{CompositeEntity, Entity, EntityId, EntityType, SimpleEntity, ValidationIssue};
pub use geometry::{Color, Direction, Frequency, Position};
pub use location_map::LocationMap;

use serde::Serialize;

/// Everything a successful parse run produces
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOutput {
    /// Per file: its simple entities in source order, then its composite
    pub entities: Vec<Entity>,
    pub locations: LocationMap,
}

impl ParseOutput {
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    /// Last entity with this name
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().rev().find(|e| e.name() == name)
    }

    /// Resolved members of a composite, skipping dangling ids
    pub fn members<'a>(
        &'a self,
        composite: &'a CompositeEntity,
    ) -> impl Iterator<Item = &'a Entity> + 'a {
        composite.members.iter().filter_map(|id| self.get(*id))
    }

    pub fn composites(&self) -> impl Iterator<Item = &CompositeEntity> {
        self.entities.iter().filter_map(Entity::as_composite)
    }
}
