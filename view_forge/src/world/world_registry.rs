/// WorldRegistry - owns every SceneWorld, addressed by stable keys.
///
/// Cameras hold `WorldKey`s, never world references. A key whose world was
/// removed simply stops resolving.

use slotmap::{new_key_type, SlotMap};
use super::scene_world::SceneWorld;

new_key_type! {
    /// Stable key for a SceneWorld within a WorldRegistry.
    pub struct WorldKey;
}

#[derive(Debug, Default)]
pub struct WorldRegistry {
    worlds: SlotMap<WorldKey, SceneWorld>,
}

impl WorldRegistry {
    pub fn new() -> Self {
        Self {
            worlds: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, world: SceneWorld) -> WorldKey {
        self.worlds.insert(world)
    }

    /// Create an empty world and return its key
    pub fn create(&mut self, name: &str) -> WorldKey {
        self.insert(SceneWorld::new(name))
    }

    pub fn remove(&mut self, key: WorldKey) -> Option<SceneWorld> {
        self.worlds.remove(key)
    }

    pub fn get(&self, key: WorldKey) -> Option<&SceneWorld> {
        self.worlds.get(key)
    }

    pub fn get_mut(&mut self, key: WorldKey) -> Option<&mut SceneWorld> {
        self.worlds.get_mut(key)
    }

    pub fn contains(&self, key: WorldKey) -> bool {
        self.worlds.contains_key(key)
    }

    /// First world with the given name
    pub fn find_by_name(&self, name: &str) -> Option<WorldKey> {
        self.worlds
            .iter()
            .find(|(_, w)| w.name() == name)
            .map(|(k, _)| k)
    }

    pub fn keys(&self) -> impl Iterator<Item = WorldKey> + '_ {
        self.worlds.keys()
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_lookup() {
        let mut registry = WorldRegistry::new();
        let main = registry.create("main");
        let sky = registry.create("skybox");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(main).unwrap().name(), "main");
        assert_eq!(registry.find_by_name("skybox"), Some(sky));
        assert_eq!(registry.find_by_name("missing"), None);
    }

    #[test]
    fn test_removed_key_stops_resolving() {
        let mut registry = WorldRegistry::new();
        let key = registry.create("temp");
        assert!(registry.remove(key).is_some());

        assert!(!registry.contains(key));
        assert!(registry.get(key).is_none());
        assert!(registry.get_mut(key).is_none());
        assert!(registry.is_empty());

        // A new world never reuses the stale key
        let other = registry.create("temp");
        assert_ne!(key, other);
    }
}
