//! Hand-tuned curves for the built-in anchors.
//!
//! Lightness is `0..=100`, chroma is in engine units (OKLab chroma × 130) and
//! hue shift is in degrees relative to the center hue. Columns run from shade
//! 50 to shade 950.

use super::AnchorCurve;

pub(super) fn anchors() -> Vec<AnchorCurve> {
    vec![
        red(),
        orange(),
        yellow(),
        lime(),
        green(),
        teal(),
        sky(),
        blue(),
        violet(),
        pink(),
    ]
}

fn red() -> AnchorCurve {
    AnchorCurve::new(
        "red",
        25.3,
        [97.1, 93.6, 88.5, 80.8, 70.4, 63.7, 57.7, 50.5, 44.4, 39.6, 25.8],
        [1.7, 4.2, 8.1, 14.8, 24.8, 30.8, 31.9, 27.7, 23.0, 18.3, 12.0],
        [-7.9, -7.6, -7.0, -5.7, -3.1, 0.0, 2.0, 2.2, 1.6, 0.4, 0.7],
    )
}

fn orange() -> AnchorCurve {
    AnchorCurve::new(
        "orange",
        47.6,
        [98.0, 95.4, 90.1, 83.7, 75.0, 70.5, 64.6, 55.3, 47.0, 40.8, 26.6],
        [2.1, 4.9, 9.9, 16.6, 23.8, 27.7, 28.9, 25.4, 20.4, 16.0, 10.3],
        [16.0, 16.0, 14.0, 11.0, 6.0, 0.0, -5.0, -8.0, -9.0, -9.0, -10.0],
    )
}

fn yellow() -> AnchorCurve {
    AnchorCurve::new(
        "yellow",
        86.0,
        [98.7, 97.3, 94.5, 90.5, 85.2, 79.5, 68.1, 55.4, 47.6, 42.1, 28.6],
        [3.4, 9.2, 16.8, 23.7, 25.9, 23.9, 21.1, 17.6, 14.8, 12.4, 8.6],
        [8.0, 8.0, 7.0, 5.0, 3.0, 0.0, -4.0, -8.0, -10.0, -12.0, -14.0],
    )
}

fn lime() -> AnchorCurve {
    AnchorCurve::new(
        "lime",
        130.9,
        [98.6, 96.7, 93.8, 89.7, 84.1, 76.8, 64.8, 53.2, 45.3, 40.5, 27.4],
        [4.0, 8.7, 16.5, 25.5, 30.9, 30.3, 26.0, 20.4, 16.1, 13.1, 9.4],
        [-10.1, -8.6, -6.6, -4.2, -2.0, 0.0, 0.8, 0.7, 0.0, 0.2, 1.2],
    )
}

fn green() -> AnchorCurve {
    AnchorCurve::new(
        "green",
        149.6,
        [98.2, 96.2, 92.5, 87.1, 79.2, 72.3, 62.7, 52.7, 44.8, 39.3, 26.6],
        [2.3, 5.7, 10.9, 19.5, 27.2, 28.5, 25.2, 20.0, 15.5, 12.4, 8.5],
        [6.2, 7.1, 6.4, 4.8, 2.1, 0.0, -0.4, 0.5, 1.7, 2.9, 3.3],
    )
}

fn teal() -> AnchorCurve {
    AnchorCurve::new(
        "teal",
        182.5,
        [98.4, 95.3, 91.0, 85.5, 77.7, 70.4, 60.0, 51.1, 43.7, 38.6, 27.7],
        [1.8, 6.6, 12.5, 17.9, 19.8, 18.2, 15.3, 12.5, 10.1, 8.2, 6.0],
        [-1.8, -1.7, -2.1, -1.4, -0.6, 0.0, 2.2, 3.9, 5.7, 5.9, 10.0],
    )
}

fn sky() -> AnchorCurve {
    AnchorCurve::new(
        "sky",
        237.3,
        [97.7, 95.1, 90.1, 82.8, 74.6, 68.5, 58.8, 50.0, 44.3, 39.1, 29.3],
        [1.7, 3.4, 7.5, 14.4, 20.8, 22.0, 20.5, 17.4, 14.3, 11.7, 8.6],
        [-0.7, -0.5, -6.4, -7.0, -4.6, 0.0, 4.7, 5.4, 3.5, 3.6, 5.9],
    )
}

fn blue() -> AnchorCurve {
    AnchorCurve::new(
        "blue",
        259.8,
        [97.0, 93.2, 88.2, 80.9, 70.7, 62.3, 54.6, 48.8, 42.4, 37.9, 28.2],
        [1.8, 4.2, 7.7, 13.7, 21.5, 27.8, 31.9, 31.6, 25.9, 19.0, 11.8],
        [-5.2, -4.2, -5.7, -8.0, -5.2, 0.0, 3.1, 4.6, 5.8, 5.7, 8.1],
    )
}

fn violet() -> AnchorCurve {
    AnchorCurve::new(
        "violet",
        292.7,
        [96.9, 94.3, 89.4, 81.1, 70.2, 60.6, 54.1, 49.1, 43.2, 38.0, 28.3],
        [2.1, 3.8, 7.4, 14.4, 23.8, 32.5, 36.5, 35.1, 30.2, 24.6, 18.3],
        [1.1, 1.9, 0.6, 0.9, 0.8, 0.0, 0.3, -0.1, 0.1, 1.0, -1.6],
    )
}

fn pink() -> AnchorCurve {
    AnchorCurve::new(
        "pink",
        354.3,
        [97.1, 94.8, 89.9, 82.3, 71.8, 65.6, 59.2, 52.5, 45.9, 40.8, 28.4],
        [1.8, 3.6, 7.9, 15.6, 26.3, 31.3, 32.4, 29.0, 24.3, 19.9, 14.2],
        [-11.1, -12.0, -11.1, -8.3, -4.5, 0.0, 6.3, 9.7, 9.5, 8.1, 9.6],
    )
}
