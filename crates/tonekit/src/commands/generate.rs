use crate::{swatch, Error, Result};
use owo_colors::{OwoColorize as _, Stream};
use serde::Serialize;
use tone_generator::{ColorPalette, PaletteGenerator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "lowercase")]
pub enum Format {
    Text,
    Css,
    Json,
}

pub struct GenerateArgs<'a, W: std::io::Write> {
    pub generator: &'a PaletteGenerator,
    pub colors: &'a [String],
    pub format: Format,
    pub name: Option<&'a str>,
    pub stdout: &'a mut W,
}

#[derive(Serialize)]
struct NamedPalette<'a> {
    name: String,
    input: &'a str,
    shades: ColorPalette,
}

pub fn run<W: std::io::Write>(args: GenerateArgs<W>) -> Result<()> {
    let palettes = args.generator.generate_palettes(args.colors);

    let mut named = Vec::with_capacity(palettes.len());
    for (index, (input, palette)) in args.colors.iter().zip(palettes).enumerate() {
        let shades = palette.ok_or_else(|| Error::InvalidColor(input.clone()))?;

        named.push(NamedPalette {
            name: palette_name(args.name, input, index, args.colors.len()),
            input,
            shades,
        });
    }

    match args.format {
        Format::Text => {
            for palette in &named {
                writeln!(
                    args.stdout,
                    "{} ({})",
                    palette.name.if_supports_color(Stream::Stdout, |s| s.bold()),
                    palette.input
                )?;

                for (shade, hex) in palette.shades.iter() {
                    writeln!(args.stdout, "  {:>3}  {}  {}", shade, swatch(hex), hex)?;
                }
            }
        }
        Format::Css => {
            for palette in &named {
                write!(
                    args.stdout,
                    "{}",
                    palette.shades.generate_css(&palette.name, ":root")
                )?;
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&named)
                .map_err(tone_generator::Error::from)?;
            writeln!(args.stdout, "{}", json)?;
        }
    }

    Ok(())
}

fn palette_name(name: Option<&str>, input: &str, index: usize, count: usize) -> String {
    match name {
        Some(name) if count == 1 => name.to_string(),
        Some(name) => format!("{}-{}", name, index + 1),
        None => format!("color-{}", input.trim_start_matches('#').to_lowercase()),
    }
}
