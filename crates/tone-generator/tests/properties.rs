mod common;

use common::{channel_distance, hue_sweep, palettes_within};
use tone_generator::color::{circular_distance, hex_to_oklch, oklch_to_rgb, parse_hex, rgb_to_oklch, to_hex};
use tone_generator::gamut::GamutLimits;
use tone_generator::{adjust_palette, generate_palette, AnchorTable, PaletteGenerator, Shade};

#[test]
fn rgb_survives_a_trip_through_oklch() {
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(17) {
                let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
                let back = to_hex(oklch_to_rgb(rgb_to_oklch(parse_hex(&hex).unwrap())));

                assert!(channel_distance(&hex, &back) <= 1, "{} came back as {}", hex, back);
            }
        }
    }
}

#[test]
fn anchor_palettes_stay_on_their_curves() {
    let limits = GamutLimits::default();
    let generator = PaletteGenerator::new();

    for anchor in AnchorTable::builtin() {
        let input = anchor.center_swatch(Shade::S500, &limits);
        let palette = generator.generate_palette(&input).unwrap();
        let base_hue = hex_to_oklch(&input).unwrap().hue;

        for (shade, hex) in palette.iter() {
            let tone = hex_to_oklch(hex).unwrap();
            let expected = generator.curve_sample(base_hue, shade);

            // Gamut clamping only ever gives up chroma
            assert!(
                (tone.lightness - expected.lightness).abs() < 1.5,
                "{} shade {}: lightness {} instead of {}",
                anchor.name,
                shade,
                tone.lightness,
                expected.lightness
            );
            assert!(tone.chroma <= expected.chroma + 1.0);
        }
    }
}

#[test]
fn palettes_have_every_shade() {
    for input in hue_sweep(30) {
        let palette = generate_palette(&input).unwrap();
        let shades: Vec<Shade> = palette.iter().map(|(shade, _)| shade).collect();

        assert_eq!(shades, Shade::ALL.to_vec());
        assert!(palette.iter().all(|(_, hex)| hex.len() == 7 && parse_hex(hex).is_some()));
    }

    for input in ["", "#", "#abcd", "#ggg", "0ea5e9ff", "##0ea5e9"] {
        assert!(generate_palette(input).is_none(), "{:?} produced a palette", input);
    }
}

#[test]
fn anchor_swatches_agree_at_shade_500() {
    let limits = GamutLimits::default();
    let generator = PaletteGenerator::new();
    let table = AnchorTable::builtin();

    let outputs: Vec<(&str, Vec<String>)> = table
        .iter()
        .map(|anchor| {
            let hexes = [Shade::S200, Shade::S500, Shade::S900]
                .into_iter()
                .map(|shade| {
                    let input = anchor.center_swatch(shade, &limits);
                    let palette = generator.generate_palette(&input).unwrap();
                    palette.get(Shade::S500).to_string()
                })
                .collect();

            (anchor.name.as_str(), hexes)
        })
        .collect();

    // Swatches are 8-bit, so their hues are only approximately the center hue
    let uniform = outputs
        .iter()
        .filter(|(_, hexes)| {
            hexes
                .windows(2)
                .all(|pair| channel_distance(&pair[0], &pair[1]) <= 4)
        })
        .count();
    let identical = outputs
        .iter()
        .filter(|(_, hexes)| hexes.windows(2).all(|pair| pair[0] == pair[1]))
        .count();

    assert!(identical <= uniform);
    assert!(
        uniform >= table.len() - 1,
        "{} anchors agree, {} of them exactly: {:?}",
        uniform,
        identical,
        outputs
    );
}

#[test]
fn adjusting_a_palette_by_nothing_keeps_it() {
    for input in hue_sweep(20) {
        let palette = generate_palette(&input).unwrap();
        let adjusted = adjust_palette(&palette, 0.0, 0.0, 0.0).unwrap();

        assert!(palettes_within(&palette, &adjusted, 1));
    }
}

#[test]
fn pure_yellow_stays_yellow() {
    let palette = generate_palette("#ffff00").unwrap();

    let darkest = hex_to_oklch(palette.get(Shade::S950)).unwrap();
    let light = hex_to_oklch(palette.get(Shade::S300)).unwrap();

    assert!(darkest.lightness >= 24.0, "shade 950 lightness {}", darkest.lightness);
    assert!(darkest.hue >= 95.0, "shade 950 hue {}", darkest.hue);
    assert!(light.hue <= 112.5, "shade 300 hue {}", light.hue);
}

#[test]
fn shades_get_darker() {
    let mut inputs = hue_sweep(10);
    inputs.extend(["#ffff00", "#eab308", "#84cc16", "#f59e0b"].map(String::from));

    for input in inputs {
        let palette = generate_palette(&input).unwrap();
        let lightness: Vec<f64> = palette
            .iter()
            .map(|(_, hex)| hex_to_oklch(hex).unwrap().lightness)
            .collect();

        for pair in lightness.windows(2) {
            assert!(
                pair[1] <= pair[0] + 1.0,
                "{} gets lighter: {:?}",
                input,
                lightness
            );
        }
    }
}

#[test]
fn grays_share_one_palette() {
    let black = generate_palette("#000000").unwrap();

    for gray in ["#808080", "#ffffff", "#fefefe", "#333"] {
        let palette = generate_palette(gray).unwrap();

        assert_eq!(palette.get(Shade::S500), black.get(Shade::S500), "{}", gray);
        assert_eq!(palette, black, "{}", gray);
    }
}

#[test]
fn sky_blue_palette() {
    let input = hex_to_oklch("#0ea5e9").unwrap();
    let palette = generate_palette("#0ea5e9").unwrap();

    let middle = hex_to_oklch(palette.get(Shade::S500)).unwrap();
    let lightest = hex_to_oklch(palette.get(Shade::S50)).unwrap();
    let darkest = hex_to_oklch(palette.get(Shade::S950)).unwrap();

    assert!(circular_distance(middle.hue, input.hue) < 3.0);
    assert!(darkest.lightness < lightest.lightness);
}
