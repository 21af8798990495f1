//! Weighted biome registry: name lookup plus the cumulative-weight draw.

use hashbrown::HashMap;

use super::BiomeKind;
use crate::seed::RandomStream;

/// Errors raised while building or drawing from the biome table.
///
/// All of these indicate a broken content table; callers must not fall back
/// to a default biome.
#[derive(Debug, thiserror::Error)]
pub enum BiomeError {
    /// No biomes registered.
    #[error("biome weight table is empty")]
    EmptyWeightTable,
    /// A weight is zero, negative, or not finite.
    #[error("biome `{name}` has invalid weight {weight}")]
    InvalidWeight { name: String, weight: f64 },
    /// The table names a biome that does not exist.
    #[error("unknown biome: {0}")]
    UnknownBiome(String),
    /// A biome appears twice in the table.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),
}

/// Ordered weight table with O(1) lookup by name.
#[derive(Clone, Debug)]
pub struct BiomeRegistry {
    entries: Vec<(BiomeKind, f64)>,
    name_to_index: HashMap<&'static str, usize>,
    total_weight: f64,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            name_to_index: HashMap::new(),
            total_weight: 0.0,
        }
    }

    /// Build a registry from `(name, weight)` pairs, preserving order.
    ///
    /// # Errors
    ///
    /// Any [`BiomeError`] other than a draw-time failure.
    pub fn from_weights<'a>(
        weights: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, BiomeError> {
        let mut registry = Self::new();
        for (name, weight) in weights {
            let kind =
                BiomeKind::from_name(name).ok_or_else(|| BiomeError::UnknownBiome(name.into()))?;
            registry.register(kind, weight)?;
        }
        if registry.is_empty() {
            return Err(BiomeError::EmptyWeightTable);
        }
        Ok(registry)
    }

    /// Append a biome with the given weight.
    ///
    /// # Errors
    ///
    /// [`BiomeError::DuplicateName`] or [`BiomeError::InvalidWeight`].
    pub fn register(&mut self, kind: BiomeKind, weight: f64) -> Result<(), BiomeError> {
        if self.name_to_index.contains_key(kind.name()) {
            return Err(BiomeError::DuplicateName(kind.name().to_string()));
        }
        if !(weight.is_finite() && weight > 0.0) {
            return Err(BiomeError::InvalidWeight {
                name: kind.name().to_string(),
                weight,
            });
        }
        self.name_to_index.insert(kind.name(), self.entries.len());
        self.entries.push((kind, weight));
        self.total_weight += weight;
        Ok(())
    }

    /// Select the biome for a uniform value `u` in `[0, 1)`.
    ///
    /// Walks the cumulative weights and returns the first entry whose running
    /// total exceeds `u * total_weight`.
    ///
    /// # Errors
    ///
    /// [`BiomeError::EmptyWeightTable`] when nothing is registered.
    pub fn select(&self, u: f64) -> Result<BiomeKind, BiomeError> {
        let Some(&(last, _)) = self.entries.last() else {
            return Err(BiomeError::EmptyWeightTable);
        };
        let target = u * self.total_weight;
        let mut cumulative = 0.0;
        for &(kind, weight) in &self.entries {
            cumulative += weight;
            if target < cumulative {
                return Ok(kind);
            }
        }
        // Rounding can leave `target` a hair above the final cumulative sum.
        Ok(last)
    }

    /// Draw a biome, consuming exactly one value from `stream`.
    ///
    /// # Errors
    ///
    /// [`BiomeError::EmptyWeightTable`] when nothing is registered; no value is
    /// consumed in that case.
    pub fn draw(&self, stream: &mut RandomStream) -> Result<BiomeKind, BiomeError> {
        if self.is_empty() {
            return Err(BiomeError::EmptyWeightTable);
        }
        self.select(stream.next_f64())
    }

    /// Weight of a biome, if registered.
    pub fn weight(&self, kind: BiomeKind) -> Option<f64> {
        self.lookup_by_name(kind.name()).map(|i| self.entries[i].1)
    }

    /// Table index of a biome name.
    pub fn lookup_by_name(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Registered `(kind, weight)` pairs in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (BiomeKind, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BiomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
