//! Masonry layout view-model helpers.
//!
//! The gallery renders photos in a column-packed grid. The rendering
//! widget is an external collaborator; this module only computes its
//! inputs: how many columns a viewport gets, and which photo lands in
//! which column. Aspect ratio is preserved by the `width`/`height`
//! carried on each [`Photo`], not by anything computed here.

use crate::photo::Photo;

// ---------------------------------------------------------------------------
// Responsive breakpoints
// ---------------------------------------------------------------------------

/// Default column count for viewports wider than every breakpoint.
pub const DEFAULT_COLUMNS: usize = 3;

/// Max-width breakpoints paired with their column counts, narrowest
/// first. A viewport at or below a breakpoint's width uses its count.
pub const BREAKPOINT_COLUMNS: &[(u32, usize)] = &[(480, 1), (768, 2), (1100, 3)];

/// Number of masonry columns for a viewport width in CSS pixels.
pub fn column_count(viewport_width: u32) -> usize {
    for &(max_width, columns) in BREAKPOINT_COLUMNS {
        if viewport_width <= max_width {
            return columns;
        }
    }
    DEFAULT_COLUMNS
}

// ---------------------------------------------------------------------------
// Column distribution
// ---------------------------------------------------------------------------

/// Assign photos to columns in round-robin index order.
///
/// Photo `i` lands in column `i % columns`, matching the placement
/// contract of the masonry widget the gallery feeds. Returns one inner
/// vec per column; `columns` is clamped to at least 1.
pub fn distribute(photos: &[Photo], columns: usize) -> Vec<Vec<Photo>> {
    let columns = columns.max(1);
    let mut grid: Vec<Vec<Photo>> = vec![Vec::new(); columns];

    for (i, photo) in photos.iter().enumerate() {
        grid[i % columns].push(photo.clone());
    }

    grid
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
