//! Process-lifetime fruit store.
//!
//! Records are addressed by their position in the sequence. Removing a record
//! shifts every later record down by one, so ids are not stable across deletes.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{AppError, Result};

use super::fruit::Fruit;

/// Shared, ordered collection of fruit records.
#[derive(Debug, Clone, Default)]
pub struct FruitStore {
    fruits: Arc<RwLock<Vec<Fruit>>>,
}

impl FruitStore {
    /// Create a store holding the given records.
    pub fn new(seed: Vec<Fruit>) -> Self {
        Self {
            fruits: Arc::new(RwLock::new(seed)),
        }
    }

    /// Create a store holding the default seed records.
    pub fn seeded() -> Self {
        Self::new(default_seed())
    }

    /// Create a store from a JSON array of fruits on disk.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| AppError::SeedRead {
            path: shown.clone(),
            source,
        })?;
        let seed: Vec<Fruit> = serde_json::from_str(&raw).map_err(|source| AppError::SeedParse {
            path: shown.clone(),
            source,
        })?;

        debug!(path = %shown, count = seed.len(), "Loaded seed file");
        Ok(Self::new(seed))
    }

    /// All records in their current order.
    pub async fn list(&self) -> Vec<Fruit> {
        self.fruits.read().await.clone()
    }

    /// Record at `index`, if any.
    pub async fn get(&self, index: usize) -> Option<Fruit> {
        self.fruits.read().await.get(index).cloned()
    }

    /// Append a record and return its index.
    pub async fn append(&self, fruit: Fruit) -> usize {
        let mut fruits = self.fruits.write().await;
        fruits.push(fruit);
        fruits.len() - 1
    }

    /// Overwrite the record at `index`.
    pub async fn replace(&self, index: usize, fruit: Fruit) -> Result<()> {
        let mut fruits = self.fruits.write().await;
        let slot = fruits
            .get_mut(index)
            .ok_or(AppError::NotFound { id: index })?;
        *slot = fruit;
        Ok(())
    }

    /// Remove the record at `index`, shifting later records down.
    pub async fn remove_at(&self, index: usize) -> Result<Fruit> {
        let mut fruits = self.fruits.write().await;
        if index >= fruits.len() {
            return Err(AppError::NotFound { id: index });
        }
        Ok(fruits.remove(index))
    }

    /// Number of records.
    pub async fn len(&self) -> usize {
        self.fruits.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.fruits.read().await.is_empty()
    }
}

fn default_seed() -> Vec<Fruit> {
    vec![
        Fruit::new("apple", "red", true),
        Fruit::new("pear", "green", false),
        Fruit::new("banana", "yellow", true),
    ]
}
