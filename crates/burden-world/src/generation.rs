//! Heightmap terrain generation.

use burden_core::constants::{CHUNK_SIZE, CHUNK_SIZE_I32};
use burden_core::{BlockId, ChunkPos, Error, Result};
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;

/// Seed type for terrain noise.
pub type WorldSeed = u32;

/// Layers of dirt under the grass cap before stone starts.
const DIRT_DEPTH: i32 = 2;

/// Terrain generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Seed for noise generation.
    pub seed: WorldSeed,
    /// Noise samples per world block.
    pub frequency: f64,
    /// Height variation above sea level, in blocks.
    pub amplitude: f64,
    /// Lowest surface height.
    pub sea_level: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 0.05,
            amplitude: 10.0,
            sea_level: 4,
        }
    }
}

impl TerrainConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: WorldSeed) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    #[must_use]
    pub const fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    #[must_use]
    pub const fn with_sea_level(mut self, sea_level: i32) -> Self {
        self.sea_level = sea_level;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "terrain frequency must be positive, got {}",
                self.frequency
            )));
        }
        if !(self.amplitude.is_finite() && self.amplitude >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "terrain amplitude must be non-negative, got {}",
                self.amplitude
            )));
        }
        Ok(())
    }
}

/// Procedural terrain generator using 2-D Perlin noise.
pub struct TerrainGenerator {
    config: TerrainConfig,
    noise: Perlin,
}

impl TerrainGenerator {
    /// Create a new terrain generator with the given configuration.
    pub fn new(config: TerrainConfig) -> Self {
        let noise = Perlin::new(config.seed);
        Self { config, noise }
    }

    /// Create a terrain generator with default configuration.
    pub fn with_seed(seed: WorldSeed) -> Self {
        Self::new(TerrainConfig::default().with_seed(seed))
    }

    /// Get the terrain configuration.
    pub const fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Surface height at world XZ coordinates, clamped into the chunk's Y range.
    pub fn height_at(&self, world_x: i32, world_z: i32) -> i32 {
        let sample = self
            .noise
            .get([
                f64::from(world_x) * self.config.frequency,
                f64::from(world_z) * self.config.frequency,
            ])
            .clamp(-1.0, 1.0);
        // Remap [-1, 1] to [0, amplitude]
        let offset = ((sample + 1.0) * 0.5 * self.config.amplitude).round() as i32;
        self.config
            .sea_level
            .saturating_add(offset)
            .clamp(0, CHUNK_SIZE_I32 - 1)
    }

    /// Block type at height `y` in a column whose surface is `surface`.
    pub const fn block_at_depth(y: i32, surface: i32) -> BlockId {
        if y > surface {
            BlockId::AIR
        } else if y == surface {
            BlockId::GRASS
        } else if y > surface - 1 - DIRT_DEPTH {
            BlockId::DIRT
        } else {
            BlockId::STONE
        }
    }

    /// Fill a chunk's columns. Does not build the mesh.
    pub fn fill_chunk(&self, chunk: &mut Chunk, pos: ChunkPos) {
        let origin = pos.origin();
        for x in 0..CHUNK_SIZE_I32 {
            for z in 0..CHUNK_SIZE_I32 {
                let surface = self.height_at(origin.x + x, origin.z + z);
                for y in 0..=surface {
                    chunk.set_block(x, y, z, Self::block_at_depth(y, surface));
                }
            }
        }
    }

    /// Generate a fresh chunk at the given position.
    pub fn generate_chunk(&self, pos: ChunkPos) -> Chunk {
        let mut chunk = Chunk::new();
        self.fill_chunk(&mut chunk, pos);
        chunk
    }
}

impl std::fmt::Debug for TerrainGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerrainGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

const _: () = assert!(CHUNK_SIZE > DIRT_DEPTH as usize);
