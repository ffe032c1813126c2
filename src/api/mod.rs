//! Client for the PokeAPI creature-data service.
//!
//! The UI only talks to the [`PokemonApi`] trait. A single
//! [`HttpPokemonClient`] is built at startup and shared behind an `Arc`,
//! so tests can swap in an in-memory implementation.

mod client;
mod error;
mod types;

pub use client::{HttpPokemonClient, PokemonApi};
pub use error::ApiError;
pub use types::{
    AbilitySlot, Artwork, CategoryReference, NamedResource, OtherSprites, Pokemon, Sprites,
    StatEntry, TypeSlot,
};
