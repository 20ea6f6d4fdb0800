use crate::{swatch, Error, Result};
use tone_generator::{PaletteGenerator, Shade};

pub struct AdjustArgs<'a, W: std::io::Write> {
    pub generator: &'a PaletteGenerator,
    pub color: &'a str,
    pub hue: f64,
    pub lightness: f64,
    pub chroma: f64,
    /// Generate a palette from `color` and adjust all of its shades.
    pub palette: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: AdjustArgs<W>) -> Result<()> {
    let invalid = || Error::InvalidColor(args.color.to_string());

    if !args.palette {
        let adjusted = args
            .generator
            .adjust_color(args.color, args.hue, args.lightness, args.chroma)
            .ok_or_else(invalid)?;

        writeln!(args.stdout, "{}  {}", swatch(&adjusted), adjusted)?;
        return Ok(());
    }

    let palette = args
        .generator
        .generate_palette(args.color)
        .ok_or_else(invalid)?;
    let adjusted =
        args.generator
            .adjust_palette(&palette, args.hue, args.lightness, args.chroma)?;

    for shade in Shade::ALL {
        writeln!(
            args.stdout,
            "  {:>3}  {}  {} -> {}",
            shade,
            swatch(&adjusted[shade]),
            &palette[shade],
            &adjusted[shade]
        )?;
    }

    Ok(())
}
