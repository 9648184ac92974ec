use clap::{ArgAction, Parser, Subcommand};
use kmconv::config::Config;
use kmconv::convert::{Converter, ParseMode, Renderer};
use kmconv::surface::{ConversionForm, OutputSurface, TextField, INPUT_ID};
use std::io::BufRead;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "kmconv")]
#[command(version, about = "Convert kilometers to miles", long_about = None)]
struct Cli {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./kmconv.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single kilometer value
    Convert {
        /// Kilometers (e.g., "10", "2.5")
        #[arg(allow_hyphen_values = true)]
        km: String,

        /// Read input like the original page did (numeric prefix, NaN otherwise)
        #[arg(long)]
        legacy: bool,

        /// Print the tagged outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert every line read from stdin
    Watch {
        /// Read input like the original page did (numeric prefix, NaN otherwise)
        #[arg(long)]
        legacy: bool,
    },

    /// Print the effective configuration
    ShowConfig,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert { km, legacy, json } => {
            convert_value(cli.config.as_deref(), &km, legacy, json)
        }
        Commands::Watch { legacy } => watch_stdin(cli.config.as_deref(), legacy),
        Commands::ShowConfig => show_config(cli.config.as_deref()),
    };

    let code = match result {
        Ok(converted) => exit_code(converted),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    if code != 0 {
        std::process::exit(code);
    }
}

/// 0 when the input became a distance, 1 when a message was shown instead
fn exit_code(converted: bool) -> i32 {
    if converted {
        0
    } else {
        1
    }
}

fn init_logging(verbose: u8) {
    let max_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kmconv={}", max_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(
    path: Option<&std::path::Path>,
    legacy: bool,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::discover(path)?;
    if legacy {
        config.parse_mode = ParseMode::Legacy;
    }
    Ok(config)
}

/// The text to print for one input, and whether it converted to a distance
fn render_value(
    config: &Config,
    km: &str,
    json: bool,
) -> Result<(String, bool), serde_json::Error> {
    let converter = Converter::new(config.parse_mode);
    let renderer = Renderer::from_config(config);

    let outcome = renderer.outcome(converter.convert(km));
    let text = if json {
        serde_json::to_string_pretty(&outcome)?
    } else {
        outcome.display().to_string()
    };

    Ok((text, outcome.is_ok()))
}

/// Returns whether the input converted to a distance
fn convert_value(
    config_path: Option<&std::path::Path>,
    km: &str,
    legacy: bool,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let config = load_config(config_path, legacy)?;
    let (text, converted) = render_value(&config, km, json)?;
    println!("{}", text);
    Ok(converted)
}

/// Output surface printing each result on its own line
struct StdoutLine;

impl OutputSurface for StdoutLine {
    fn set_text(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// One conversion per line of `reader`; hands the output surface back at EOF
fn watch_lines<R: BufRead, O: OutputSurface>(
    reader: R,
    output: O,
    config: &Config,
) -> std::io::Result<O> {
    let mut form = ConversionForm::with_config(TextField::new(INPUT_ID), output, config);

    for line in reader.lines() {
        form.input.set_value(line?);
        form.convert();
    }

    Ok(form.output)
}

fn watch_stdin(
    config_path: Option<&std::path::Path>,
    legacy: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let config = load_config(config_path, legacy)?;
    watch_lines(std::io::stdin().lock(), StdoutLine, &config)?;
    Ok(true)
}

fn show_config(config_path: Option<&std::path::Path>) -> Result<bool, Box<dyn std::error::Error>> {
    let config = Config::discover(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(true)
}
