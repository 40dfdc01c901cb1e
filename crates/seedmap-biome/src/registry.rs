//! Biome registry: maps [`BiomeIndex`] to [`BiomeDef`] with name-based lookup.

use std::sync::LazyLock;

use hashbrown::HashMap;

use crate::BiomeColor;
use crate::builtin::BUILTIN_BIOMES;

/// Dense, stable position of a biome in its registry, in `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BiomeIndex(pub u16);

impl BiomeIndex {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Errors that can occur when registering biomes.
#[derive(Debug, thiserror::Error)]
pub enum BiomeRegistryError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),
    /// The registry already holds `u16::MAX + 1` biomes.
    #[error("biome registry is full")]
    Full,
}

/// Descriptor for a single biome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomeDef {
    /// Unique biome name (e.g., "Plains").
    pub name: String,
    /// Color used when a profile doesn't override this biome.
    pub default_color: BiomeColor,
}

impl BiomeDef {
    pub fn new(name: impl Into<String>, default_color: BiomeColor) -> Self {
        Self {
            name: name.into(),
            default_color,
        }
    }
}

static BUILTIN: LazyLock<BiomeRegistry> = LazyLock::new(|| {
    let mut registry = BiomeRegistry::new();
    for &(name, color) in BUILTIN_BIOMES {
        if let Err(err) = registry.register(BiomeDef::new(name, color)) {
            tracing::error!("skipping builtin biome {name}: {err}");
        }
    }
    registry
});

/// Stores all registered biome definitions with O(1) lookup by index or name.
///
/// Indices are assigned in registration order and never change.
#[derive(Clone, Debug, Default)]
pub struct BiomeRegistry {
    biomes: Vec<BiomeDef>,
    name_to_index: HashMap<String, BiomeIndex>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared registry of the standard overworld, nether and end biomes.
    pub fn builtin() -> &'static BiomeRegistry {
        &BUILTIN
    }

    /// Builds a registry from `defs`, indexing them in iteration order.
    ///
    /// # Errors
    ///
    /// Returns the first [`BiomeRegistryError`] hit while registering.
    pub fn from_defs(
        defs: impl IntoIterator<Item = BiomeDef>,
    ) -> Result<Self, BiomeRegistryError> {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Registers a new biome definition, returning its assigned [`BiomeIndex`].
    ///
    /// # Errors
    ///
    /// Returns [`BiomeRegistryError::DuplicateName`] if a biome with the same name exists.
    pub fn register(&mut self, def: BiomeDef) -> Result<BiomeIndex, BiomeRegistryError> {
        if self.name_to_index.contains_key(&def.name) {
            return Err(BiomeRegistryError::DuplicateName(def.name));
        }
        let index = u16::try_from(self.biomes.len())
            .map(BiomeIndex)
            .map_err(|_| BiomeRegistryError::Full)?;
        self.name_to_index.insert(def.name.clone(), index);
        self.biomes.push(def);
        Ok(index)
    }

    /// Returns the definition at `index`, or `None` if out of range.
    pub fn get(&self, index: BiomeIndex) -> Option<&BiomeDef> {
        self.biomes.get(index.as_usize())
    }

    /// Looks up a biome index by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<BiomeIndex> {
        self.name_to_index.get(name).copied()
    }

    /// Returns `true` if a biome called `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Iterates over all biomes in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (BiomeIndex, &BiomeDef)> + '_ {
        self.biomes
            .iter()
            .enumerate()
            .map(|(i, def)| (BiomeIndex(i as u16), def))
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}
