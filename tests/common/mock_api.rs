//! In-memory `PokemonApi` with a call log.

#![allow(dead_code)]

use async_trait::async_trait;
use pokesearch::api::{ApiError, CategoryReference, Pokemon, PokemonApi};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockPokemonApi {
    records: HashMap<String, Pokemon>,
    types: HashMap<String, Vec<CategoryReference>>,
    calls: Mutex<Vec<String>>,
}

impl MockPokemonApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: Pokemon) -> Self {
        self.records.insert(record.name.clone(), record);
        self
    }

    pub fn with_type(mut self, category: &str, references: Vec<CategoryReference>) -> Self {
        self.types.insert(category.to_string(), references);
        self
    }

    /// `"name:pikachu"` / `"type:fire"` in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PokemonApi for MockPokemonApi {
    async fn fetch_by_name(&self, name: &str) -> Result<Pokemon, ApiError> {
        self.calls.lock().unwrap().push(format!("name:{}", name));
        self.records
            .get(name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                resource: name.to_string(),
            })
    }

    async fn fetch_by_type(&self, category: &str) -> Result<Vec<CategoryReference>, ApiError> {
        self.calls.lock().unwrap().push(format!("type:{}", category));
        self.types
            .get(category)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                resource: category.to_string(),
            })
    }
}
