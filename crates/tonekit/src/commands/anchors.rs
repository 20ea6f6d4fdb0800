use crate::Result;
use tone_generator::PaletteGenerator;

pub struct AnchorsArgs<'a, W: std::io::Write> {
    pub generator: &'a PaletteGenerator,
    pub stdout: &'a mut W,
}

/// Prints the active anchor table in the same JSON format `--anchors` reads.
pub fn run<W: std::io::Write>(args: AnchorsArgs<W>) -> Result<()> {
    let json = args.generator.config().anchors.to_json()?;
    writeln!(args.stdout, "{}", json)?;

    Ok(())
}
