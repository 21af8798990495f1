//! Biome system: eleven elevation/classification variants, sub-biome
//! descriptors, and the weighted registry used for per-chunk assignment.

mod kind;
mod profile;
mod registry;
pub(crate) mod sub_biome;
mod variants;

pub use kind::BiomeKind;
pub use profile::{ElevationProfile, NoiseTuning, SamplePoint};
pub use registry::{BiomeError, BiomeRegistry};
pub use sub_biome::{BEACH, CLOUD_PEAK, ClassifyContext, DEEP_WATER, Organism, SHALLOWS, SubBiome};
