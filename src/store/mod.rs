//! Fruit records and the in-memory store that holds them.
//!
//! This module handles:
//! - The fruit record type and its form representation
//! - The process-lifetime, position-addressed store

pub mod fruit;
pub mod memory;

pub use fruit::{Fruit, FruitForm};
pub use memory::FruitStore;
