//! Exact-HSL synthesis.
//!
//! `hsl -> hex -> hsl` is lossy because hex quantizes every channel to
//! 8 bits. Shades of one palette must decode back to the same integer hue
//! and saturation as their base, so instead of trusting the first encoding
//! we search a small neighborhood of inputs for one that round-trips.

// Allow intentional float casts for the search grid
#![allow(clippy::cast_precision_loss)]
// Rounded components are integral, so exact comparison is intended
#![allow(clippy::float_cmp)]

use crate::models::{Hsl, RgbColor};

/// Half-width of the search window in each dimension, in quarter steps.
const SEARCH_RADIUS: i32 = 12;
/// Grid step of the local search.
const SEARCH_STEP: f64 = 0.25;
/// Weight of hue and saturation error relative to lightness error.
const HS_WEIGHT: f64 = 10.0;

/// Distance between two integer hues on the color wheel.
fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a.rem_euclid(360.0) - b.rem_euclid(360.0)).abs();
    diff.min(360.0 - diff)
}

/// Rounded components of a decoded color, hue folded into `[0, 360)`.
fn rounded(hsl: Hsl) -> Hsl {
    Hsl::new(hsl.h.round().rem_euclid(360.0), hsl.s.round(), hsl.l.round())
}

/// Synthesizes a color at lightness `l` that decodes to exactly `h` and `s`.
///
/// `h` and `s` are expected to be integers already; `l` may be fractional.
/// The first guess is the plain HSL encoding. If its rounded hue and
/// saturation do not match, a grid of `±3` in steps of `0.25` around
/// `(h, s, l)` is searched: exact hue and saturation matches win, closest
/// lightness first. Without an exact match the candidate with the smallest
/// weighted error is used, and if nothing beats the first guess it is
/// returned unchanged.
///
/// The result may sit up to 3 points away from `l`; callers that need an
/// ordering between shades must check the decoded lightness.
#[must_use]
pub fn synthesize_exact(h: f64, s: f64, l: f64) -> RgbColor {
    let first_guess = RgbColor::from_hsl(h, s, l);
    let decoded = rounded(first_guess.to_hsl());

    let mut hue_diff = hue_distance(decoded.h, h);
    let mut sat_diff = (decoded.s - s).abs();
    if hue_diff == 0.0 && sat_diff == 0.0 {
        return first_guess;
    }

    let mut exact_match: Option<(RgbColor, f64)> = None;
    let mut best = first_guess;
    let mut best_diff = hue_diff * HS_WEIGHT + sat_diff * HS_WEIGHT + (decoded.l - l).abs();

    for hi in -SEARCH_RADIUS..=SEARCH_RADIUS {
        for si in -SEARCH_RADIUS..=SEARCH_RADIUS {
            for li in -SEARCH_RADIUS..=SEARCH_RADIUS {
                let try_h = h + f64::from(hi) * SEARCH_STEP;
                let try_s = (s + f64::from(si) * SEARCH_STEP).clamp(0.0, 100.0);
                let try_l = (l + f64::from(li) * SEARCH_STEP).clamp(0.0, 100.0);

                let candidate = RgbColor::from_hsl(try_h, try_s, try_l);
                let check = rounded(candidate.to_hsl());

                hue_diff = hue_distance(check.h, h);
                sat_diff = (check.s - s).abs();
                let light_diff = (check.l - l).abs();

                if hue_diff == 0.0 && sat_diff == 0.0 {
                    if check.l == l.round() {
                        return candidate;
                    }
                    if exact_match.is_none_or(|(_, diff)| light_diff < diff) {
                        exact_match = Some((candidate, light_diff));
                    }
                }

                let total = hue_diff * HS_WEIGHT + sat_diff * HS_WEIGHT + light_diff;
                if total < best_diff {
                    best_diff = total;
                    best = candidate;
                }
            }
        }
    }

    exact_match.map_or(best, |(color, _)| color)
}

/// Hex form of [`synthesize_exact`].
#[must_use]
pub fn synthesize_exact_hex(h: f64, s: f64, l: f64) -> String {
    synthesize_exact(h, s, l).to_hex()
}
