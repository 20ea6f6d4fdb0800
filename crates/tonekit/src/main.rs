use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use owo_colors::{OwoColorize as _, Stream};
use std::path::PathBuf;

use tonekit::commands::adjust::{run as adjust, AdjustArgs};
use tonekit::commands::anchors::{run as anchors, AnchorsArgs};
use tonekit::commands::generate::{run as generate, Format, GenerateArgs};
use tonekit::commands::gradient::{run as gradient, GradientArgs};

#[derive(Parser, Debug, Clone)]
#[command(about = "Tonekit, a perceptual color palette generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    /// Print debug logs to stderr
    #[clap(long, short, global = true)]
    verbose: bool,

    /// Load anchor curves from a JSON file instead of the built-in table
    #[clap(long, global = true)]
    anchors: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Generate an 11-shade palette for each color
    Generate {
        #[arg(required = true)]
        colors: Vec<String>,
        #[arg(long, default_value = "text")]
        format: Format,
        /// Name used for CSS properties and JSON output
        #[arg(long)]
        name: Option<String>,
    },
    /// Shift the hue, lightness or chroma of a color or of its palette
    Adjust {
        color: String,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        hue: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        lightness: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        chroma: f64,
        /// Generate a palette from the color and adjust every shade
        #[arg(long)]
        palette: bool,
    },
    /// Preview a gradient between two colors
    Gradient {
        from: String,
        to: String,
        #[arg(long, default_value_t = 9)]
        steps: usize,
    },
    /// Print the active anchor table as JSON
    Anchors,
}

fn main() {
    let args = Args::parse();
    args.color.init();
    _ = tonekit::logger::init(tonekit::logger::level(args.verbose));

    let generator = match tonekit::load_generator(args.anchors.as_deref()) {
        Ok(generator) => generator,
        Err(e) => exit_with(e),
    };

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Generate {
            colors,
            format,
            name,
        }) => generate(GenerateArgs {
            generator: &generator,
            colors: &colors,
            format,
            name: name.as_deref(),
            stdout: &mut stdout,
        }),
        Some(Commands::Adjust {
            color,
            hue,
            lightness,
            chroma,
            palette,
        }) => adjust(AdjustArgs {
            generator: &generator,
            color: &color,
            hue,
            lightness,
            chroma,
            palette,
            stdout: &mut stdout,
        }),
        Some(Commands::Gradient { from, to, steps }) => gradient(GradientArgs {
            from: &from,
            to: &to,
            steps,
            stdout: &mut stdout,
        }),
        Some(Commands::Anchors) => anchors(AnchorsArgs {
            generator: &generator,
            stdout: &mut stdout,
        }),
        None => {
            _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

fn exit_with(error: tonekit::Error) -> ! {
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |s| s.red()),
        error
    );
    std::process::exit(1);
}
