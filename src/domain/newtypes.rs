// SPDX-License-Identifier: MPL-2.0
//! Range-checked values read from configuration.
//!
//! Both types clamp on construction, so a hand-edited `settings.toml` can
//! never push the gallery outside the supported range.

use crate::config::defaults;

// =============================================================================
// TileSize
// =============================================================================

/// Edge length of a gallery tile preview, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSize(f32);

impl TileSize {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(defaults::MIN_TILE_SIZE, defaults::MAX_TILE_SIZE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self(defaults::DEFAULT_TILE_SIZE)
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of diagnostic events kept in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            defaults::MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            defaults::MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(defaults::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}
