// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Tiles**: Preview size of gallery tiles
//! - **Diagnostics**: In-memory diagnostic event buffer

// ==========================================================================
// Tile Defaults
// ==========================================================================

/// Default edge length of a tile preview (logical pixels).
pub const DEFAULT_TILE_SIZE: f32 = 160.0;

/// Smallest tile preview.
pub const MIN_TILE_SIZE: f32 = 64.0;

/// Largest tile preview.
pub const MAX_TILE_SIZE: f32 = 512.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 50;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TILE_SIZE > 0.0);
    assert!(MAX_TILE_SIZE > MIN_TILE_SIZE);
    assert!(DEFAULT_TILE_SIZE >= MIN_TILE_SIZE);
    assert!(DEFAULT_TILE_SIZE <= MAX_TILE_SIZE);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
