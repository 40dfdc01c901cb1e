//! The [`WorldSeed`] value type and the rules that derive it from raw input.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::hash::text_seed_hash;

/// Where a [`WorldSeed`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldSeedKind {
    /// Arbitrary non-numeric text, hashed into a number.
    Text,
    /// Text that parsed as a base-10 `i64`.
    Numeric,
    /// Read back from an existing saved world.
    SaveGame,
    /// Drawn from a cryptographically secure generator.
    Random,
}

impl WorldSeedKind {
    /// Fixed label prefix shown to users.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Text => "Text Seed",
            Self::Numeric => "Numeric Seed",
            Self::SaveGame => "Save Game Seed",
            Self::Random => "Random Seed",
        }
    }

    fn label(self, value: i64, text: Option<&str>) -> String {
        match (self, text) {
            (Self::Text, Some(text)) => format!("{}: '{text}' ({value})", self.display_name()),
            _ => format!("{}: {value}", self.display_name()),
        }
    }
}

impl fmt::Display for WorldSeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Immutable world seed with its provenance and a precomputed label.
///
/// The label is derived once from `(kind, value, text)` when the seed is built
/// and can't be set independently. Deserialized seeds recompute it as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WorldSeedRepr", into = "WorldSeedRepr")]
pub struct WorldSeed {
    value: i64,
    text: Option<String>,
    kind: WorldSeedKind,
    label: String,
}

/// On-disk shape of a [`WorldSeed`]; the label is never stored.
#[derive(Serialize, Deserialize)]
struct WorldSeedRepr {
    value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    kind: WorldSeedKind,
}

/// A stored seed whose text doesn't match its kind.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidWorldSeed {
    #[error("text seed {0} has no text")]
    MissingText(i64),
    #[error("{kind} {value} must not carry text")]
    UnexpectedText { kind: WorldSeedKind, value: i64 },
}

impl TryFrom<WorldSeedRepr> for WorldSeed {
    type Error = InvalidWorldSeed;

    fn try_from(repr: WorldSeedRepr) -> Result<Self, Self::Error> {
        match (repr.kind, repr.text.is_some()) {
            (WorldSeedKind::Text, false) => Err(InvalidWorldSeed::MissingText(repr.value)),
            (kind, true) if kind != WorldSeedKind::Text => Err(InvalidWorldSeed::UnexpectedText {
                kind,
                value: repr.value,
            }),
            _ => Ok(Self::new(repr.value, repr.text, repr.kind)),
        }
    }
}

impl From<WorldSeed> for WorldSeedRepr {
    fn from(seed: WorldSeed) -> Self {
        Self {
            value: seed.value,
            text: seed.text,
            kind: seed.kind,
        }
    }
}

impl WorldSeed {
    fn new(value: i64, text: Option<String>, kind: WorldSeedKind) -> Self {
        let label = kind.label(value, text.as_deref());
        Self {
            value,
            text,
            kind,
            label,
        }
    }

    /// Derives a seed from whatever the user typed.
    ///
    /// Never fails:
    /// - empty input yields a [`WorldSeedKind::Random`] seed,
    /// - input that parses as a base-10 `i64` yields a [`WorldSeedKind::Numeric`] seed,
    /// - anything else (including out-of-range numbers) yields a
    ///   [`WorldSeedKind::Text`] seed whose value is [`text_seed_hash`] of the input.
    ///
    /// Only ASCII digits count as numeric. Input written in other Unicode
    /// decimal digits, such as `"١٢٣"`, becomes a text seed.
    pub fn from_user_input(input: &str) -> Self {
        if input.is_empty() {
            return Self::random();
        }
        let seed = match input.parse::<i64>() {
            Ok(value) => Self::new(value, None, WorldSeedKind::Numeric),
            Err(_) => Self::new(
                i64::from(text_seed_hash(input)),
                Some(input.to_owned()),
                WorldSeedKind::Text,
            ),
        };
        tracing::debug!(kind = ?seed.kind, value = seed.value, "derived world seed");
        seed
    }

    /// Draws a fresh seed from the thread-local CSPRNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Draws a seed from `rng`: eight bytes read as a big-endian `i64`.
    pub fn random_with<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 8];
        rng.fill_bytes(&mut bytes);
        Self::new(i64::from_be_bytes(bytes), None, WorldSeedKind::Random)
    }

    /// Wraps a seed read from an existing saved world.
    pub fn from_save_game(value: i64) -> Self {
        Self::new(value, None, WorldSeedKind::SaveGame)
    }

    /// The numeric seed handed to world generation.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Original user text, present only for [`WorldSeedKind::Text`] seeds.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn kind(&self) -> WorldSeedKind {
        self.kind
    }

    /// Human-readable label, e.g. `Numeric Seed: 5`.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for WorldSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
