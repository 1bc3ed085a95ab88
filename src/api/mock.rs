//! In-memory creature source for testing without network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::api::client::CreatureSource;
use crate::core::error::{GameError, Result};
use crate::core::types::{Creature, TypeMember};

/// Serves creatures from maps and records every request.
///
/// Unknown ids and urls fail like a 404 would. Unknown types return an
/// empty listing. Clones share the same data.
#[derive(Clone, Default)]
pub struct MockSource {
    by_id: Arc<Mutex<HashMap<String, Creature>>>,
    by_url: Arc<Mutex<HashMap<String, Creature>>>,
    by_type: Arc<Mutex<HashMap<String, Vec<TypeMember>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer by-id lookups for `creature.id` and `creature.name`
    pub fn with_creature(self, creature: Creature) -> Self {
        {
            let mut by_id = lock(&self.by_id);
            by_id.insert(creature.id.to_string(), creature.clone());
            by_id.insert(creature.name.clone(), creature);
        }
        self
    }

    pub fn with_url(self, url: impl Into<String>, creature: Creature) -> Self {
        lock(&self.by_url).insert(url.into(), creature);
        self
    }

    pub fn with_type(self, type_name: impl Into<String>, members: Vec<TypeMember>) -> Self {
        lock(&self.by_type).insert(type_name.into(), members);
        self
    }

    /// Make a previously added creature fail from now on
    pub fn remove_creature(&self, creature: &Creature) {
        let mut by_id = lock(&self.by_id);
        by_id.remove(&creature.id.to_string());
        by_id.remove(&creature.name);
    }

    /// Every request path seen so far, e.g. `id:25`, `type:fire`, `url:...`
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    fn record(&self, request: String) {
        lock(&self.requests).push(request);
    }
}

/// A panic while holding a map leaves the data intact, so poisoning is ignored
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl CreatureSource for MockSource {
    async fn fetch_by_id(&self, id_or_name: &str) -> Result<Creature> {
        self.record(format!("id:{id_or_name}"));
        lock(&self.by_id)
            .get(id_or_name)
            .cloned()
            .ok_or_else(|| GameError::fetch(id_or_name, "HTTP 404 Not Found"))
    }

    async fn fetch_by_type(&self, type_name: &str) -> Result<Vec<TypeMember>> {
        self.record(format!("type:{type_name}"));
        Ok(lock(&self.by_type)
            .get(type_name)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_by_url(&self, url: &str) -> Result<Creature> {
        self.record(format!("url:{url}"));
        lock(&self.by_url)
            .get(url)
            .cloned()
            .ok_or_else(|| GameError::fetch(url, "HTTP 404 Not Found"))
    }
}

/// Source whose lookups all block on one shared barrier.
///
/// With a barrier sized to N, the lookups only complete when N of them are
/// in flight at the same time.
#[cfg(test)]
pub(crate) struct GatedSource {
    barrier: tokio::sync::Barrier,
}

#[cfg(test)]
impl GatedSource {
    pub(crate) fn new(parties: usize) -> Self {
        Self {
            barrier: tokio::sync::Barrier::new(parties),
        }
    }

    fn creature(key: &str) -> Creature {
        Creature {
            id: key.parse().unwrap_or(0),
            name: format!("creature-{key}"),
            front_sprite: format!("https://img/{key}.png"),
            back_sprite: String::new(),
            hp: 10,
            attack: 10,
            type_name: "normal".into(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl CreatureSource for GatedSource {
    async fn fetch_by_id(&self, id_or_name: &str) -> Result<Creature> {
        self.barrier.wait().await;
        Ok(Self::creature(id_or_name))
    }

    async fn fetch_by_type(&self, _type_name: &str) -> Result<Vec<TypeMember>> {
        self.barrier.wait().await;
        Ok(Vec::new())
    }

    async fn fetch_by_url(&self, url: &str) -> Result<Creature> {
        self.barrier.wait().await;
        let key = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
        Ok(Self::creature(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(id: u32, name: &str) -> Creature {
        Creature {
            id,
            name: name.into(),
            front_sprite: String::new(),
            back_sprite: String::new(),
            hp: 1,
            attack: 1,
            type_name: "normal".into(),
        }
    }

    #[tokio::test]
    async fn test_poisoned_map_still_serves() {
        let source = MockSource::new().with_creature(creature(25, "pikachu"));

        let by_id = Arc::clone(&source.by_id);
        let _ = std::thread::spawn(move || {
            let _guard = by_id.lock().unwrap();
            panic!("poison the map");
        })
        .join();
        assert!(source.by_id.is_poisoned());

        let found = source.fetch_by_id("25").await.unwrap();
        assert_eq!(found.name, "pikachu");
        assert!(source.fetch_by_id("26").await.is_err());
        assert_eq!(source.requests(), ["id:25", "id:26"]);
    }
}
