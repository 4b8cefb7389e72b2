use clap::{ArgAction, Parser, Subcommand};
use magiccss_codegen::{Breakpoint, MagicCss, Responsive};
use magiccss_config::{Options, ThemeRegistry};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "magiccss")]
#[command(about = "MagicCSS — themed stylesheet generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a stylesheet from a JSON options file
    Build {
        /// Input options file
        path: String,

        /// Write CSS to this file instead of stdout
        #[arg(long, short)]
        output: Option<String>,

        /// Extra themes file (JSON object of name → theme)
        #[arg(long)]
        themes: Option<String>,
    },

    /// List built-in themes
    Themes,

    /// Print a responsive declaration fragment
    Media {
        /// CSS property to emit
        property: String,

        /// Wrap the declarations in this selector
        #[arg(long)]
        selector: Option<String>,

        #[arg(long)]
        general: Option<String>,

        #[arg(long)]
        mobile: Option<String>,

        #[arg(long)]
        tablet: Option<String>,

        #[arg(long)]
        x2: Option<String>,

        #[arg(long)]
        x3: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::Build {
            path,
            output,
            themes,
        } => cmd_build(&path, output.as_deref(), themes.as_deref()),
        Command::Themes => cmd_themes(),
        Command::Media {
            property,
            selector,
            general,
            mobile,
            tablet,
            x2,
            x3,
        } => {
            let values = Responsive {
                general,
                mobile,
                tablet,
                media2x: x2,
                media3x: x3,
            };
            cmd_media(selector.as_deref(), &property, &values);
        }
    }
}

fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_registry(themes: Option<&str>) -> ThemeRegistry {
    let mut registry = ThemeRegistry::builtin().clone();
    let Some(path) = themes else {
        return registry;
    };

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    };
    match registry.load_json(&json) {
        Ok(count) => tracing::info!(count, path, "loaded themes"),
        Err(e) => {
            eprintln!("Error in {path}: {e}");
            std::process::exit(1);
        }
    }
    registry
}

fn cmd_build(path: &str, output: Option<&str>, themes: Option<&str>) {
    let registry = load_registry(themes);

    let options = match Options::from_path(path) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let css = MagicCss::with_registry(&registry, options).get_style();

    match output {
        Some(out) => {
            if let Err(e) = std::fs::write(out, &css) {
                eprintln!("Error writing {}: {e}", Path::new(out).display());
                std::process::exit(1);
            }
            eprintln!("Built: {out}");
        }
        None => print!("{css}"),
    }
}

fn cmd_themes() {
    for name in ThemeRegistry::builtin().names() {
        println!("{name}");
    }
}

fn cmd_media(selector: Option<&str>, property: &str, values: &Responsive) {
    if Breakpoint::ALL.iter().all(|bp| values.value(*bp).is_none()) && values.general.is_none() {
        eprintln!("Warning: no values given for {property}");
    }
    print!("{}", values.render(selector, property));
}
