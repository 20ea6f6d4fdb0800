#![allow(dead_code)]

use tone_generator::color::{oklch_to_hex, parse_hex, Tone};
use tone_generator::ColorPalette;

/// Saturated inputs spread evenly around the hue circle.
pub fn hue_sweep(step: usize) -> Vec<String> {
    (0..360)
        .step_by(step)
        .map(|hue| oklch_to_hex(Tone::new(65.0, 12.0, hue as f64)))
        .collect()
}

/// Largest per-channel difference between two hex colors.
pub fn channel_distance(a: &str, b: &str) -> u8 {
    let a = parse_hex(a).unwrap();
    let b = parse_hex(b).unwrap();

    [
        a.red.abs_diff(b.red),
        a.green.abs_diff(b.green),
        a.blue.abs_diff(b.blue),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

pub fn palettes_within(a: &ColorPalette, b: &ColorPalette, tolerance: u8) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|((_, x), (_, y))| channel_distance(x, y) <= tolerance)
}
