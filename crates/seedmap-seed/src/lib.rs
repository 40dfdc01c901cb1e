//! World seed derivation: turns raw user input, save-game values, or fresh
//! randomness into a typed [`WorldSeed`] with a reproducible display label.

mod hash;
mod seed;

pub use hash::{TEXT_SEED_HASH_VERSION, text_seed_hash};
pub use seed::{InvalidWorldSeed, WorldSeed, WorldSeedKind};
