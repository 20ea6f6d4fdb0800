use crate::{swatch, Error, Result};
use tone_generator::cie::gradient;
use tone_generator::color::parse_hex;

pub struct GradientArgs<'a, W: std::io::Write> {
    pub from: &'a str,
    pub to: &'a str,
    pub steps: usize,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: GradientArgs<W>) -> Result<()> {
    for color in [args.from, args.to] {
        if parse_hex(color).is_none() {
            return Err(Error::InvalidColor(color.to_string()));
        }
    }

    let colors = gradient(args.from, args.to, args.steps)
        .ok_or_else(|| Error::InvalidColor(args.from.to_string()))?;

    for hex in colors {
        writeln!(args.stdout, "{}  {}", swatch(&hex), hex)?;
    }

    Ok(())
}
