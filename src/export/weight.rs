//! Tailwind-style weight labels (50, 100, ... 950) for palette shades.

// Allow intentional casts in the interpolated fallback
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

/// Fixed weight sequences for palettes of 2 to 19 shades.
const WEIGHT_TABLES: [&[u32]; 18] = [
    &[50, 950],
    &[50, 500, 950],
    &[50, 500, 600, 950],
    &[50, 400, 500, 600, 950],
    &[50, 400, 500, 600, 700, 950],
    &[50, 300, 400, 500, 600, 700, 950],
    &[50, 300, 400, 500, 600, 700, 800, 950],
    &[50, 200, 300, 400, 500, 600, 700, 800, 950],
    &[50, 200, 300, 400, 500, 600, 700, 800, 900, 950],
    &[50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950],
    &[50, 100, 150, 200, 300, 400, 500, 600, 700, 800, 900, 950],
    &[50, 100, 150, 200, 300, 400, 500, 600, 700, 800, 850, 900, 950],
    &[50, 100, 150, 200, 250, 300, 400, 500, 600, 700, 800, 850, 900, 950],
    &[50, 100, 150, 200, 250, 300, 400, 500, 600, 700, 750, 800, 850, 900, 950],
    &[50, 100, 150, 200, 250, 300, 350, 400, 500, 600, 700, 750, 800, 850, 900, 950],
    &[
        50, 100, 150, 200, 250, 300, 350, 400, 500, 600, 650, 700, 750, 800, 850, 900, 950,
    ],
    &[
        50, 100, 150, 200, 250, 300, 350, 400, 450, 500, 600, 650, 700, 750, 800, 850, 900, 950,
    ],
    &[
        50, 100, 150, 200, 250, 300, 350, 400, 450, 500, 550, 600, 650, 700, 750, 800, 850, 900,
        950,
    ],
];

/// Weight label of shade `index` in a palette of `total` shades.
///
/// Counts 2 to 19 use fixed tables, a single shade is 500, and larger
/// palettes interpolate 50 to 950 linearly, rounded to the nearest 5.
/// An index past the end is treated as the last shade.
#[must_use]
pub fn tailwind_weight(index: usize, total: usize) -> u32 {
    if total <= 1 {
        return 500;
    }

    let index = index.min(total - 1);
    if let Some(table) = WEIGHT_TABLES.get(total - 2) {
        return table[index];
    }

    let position = index as f64 / (total - 1) as f64;
    let weight = 50.0 + position * 900.0;
    ((weight / 5.0).round() * 5.0) as u32
}

/// All weight labels of a palette of `total` shades.
#[must_use]
pub fn tailwind_weights(total: usize) -> Vec<u32> {
    (0..total).map(|index| tailwind_weight(index, total)).collect()
}
