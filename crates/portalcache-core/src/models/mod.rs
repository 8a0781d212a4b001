//! Data types mirroring the Rick and Morty API's JSON shape.
//!
//! The store and cache treat everything except `Character::id` as opaque
//! descriptive data; fields are carried through untouched.

pub mod character;

pub use character::{ApiInfo, Character, CharacterPage, LocationRef};
