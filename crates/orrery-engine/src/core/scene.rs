use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Flat entity storage. Scenes here hold tens of entities, so linear
/// lookups by ID are fine.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Resolve a list of IDs to entities, skipping unknown IDs.
    /// Order follows `ids`.
    pub fn select<'a>(&'a self, ids: &'a [EntityId]) -> impl Iterator<Item = &'a Entity> + 'a {
        ids.iter().filter_map(move |id| self.get(*id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec3::new(10.0, 0.0, 20.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec3::new(10.0, 0.0, 20.0));
    }

    #[test]
    fn despawn_keeps_spawn_order() {
        let mut scene = Scene::new();
        for i in 1..=3 {
            scene.spawn(Entity::new(EntityId(i)));
        }
        assert!(scene.despawn(EntityId(1)).is_some());
        let ids: Vec<_> = scene.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(2), EntityId(3)]);
        assert!(scene.despawn(EntityId(1)).is_none());
    }

    #[test]
    fn select_skips_unknown_ids() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("Mercury"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("Venus"));
        let ids = [EntityId(2), EntityId(9), EntityId(1)];
        let tags: Vec<_> = scene.select(&ids).map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["Venus", "Mercury"]);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("sun"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("Earth"));
        assert_eq!(scene.find_by_tag("Earth").unwrap().id, EntityId(2));
        assert!(scene.find_by_tag("Pluto").is_none());
    }
}
