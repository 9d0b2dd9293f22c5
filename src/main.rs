use clap::{Parser, Subcommand};
use clampgen::clamp;
use clampgen::clamp::model::{Configuration, Field, OutputUnit};
use clampgen::session;
use clampgen::unit::{self, Unit};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clampgen")]
#[command(about = "Generate CSS clamp() values for fluid typography", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a clamp() expression from two viewport widths and two font sizes
    Generate {
        /// Min viewport width (e.g., "320px")
        #[arg(long)]
        min_width: Option<String>,

        /// Max viewport width (e.g., "1240px")
        #[arg(long)]
        max_width: Option<String>,

        /// Font size at the min width (e.g., "16px" or "1rem")
        #[arg(long)]
        min_font_size: Option<String>,

        /// Font size at the max width (e.g., "54px")
        #[arg(long)]
        max_font_size: Option<String>,

        /// Result unit: rem or px
        #[arg(short, long)]
        unit: Option<OutputUnit>,

        /// TOML file with default field values
        #[arg(short, long)]
        config: Option<String>,

        /// Print both renderings and the linear model as JSON
        #[arg(long)]
        json: bool,

        /// Also copy the result to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Re-express a rem clamp() expression in pixels
    ToPx {
        /// Expression produced by `generate` (e.g., "clamp(1rem, 0.1739rem + 4.1304vw, 3.375rem)")
        expression: String,
    },

    /// Show how a field value is read
    Parse {
        /// Field value (e.g., "320px")
        value: String,
    },

    /// Swap a value's unit label without rescaling ("320px" -> "320rem")
    ToggleUnit {
        /// Field value (e.g., "320px")
        value: String,

        /// New unit label (px or rem)
        unit: String,
    },
}

struct GenerateArgs {
    fields: [(Field, Option<String>); 4],
    unit: Option<OutputUnit>,
    config: Option<String>,
    json: bool,
    copy: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clampgen=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            min_width,
            max_width,
            min_font_size,
            max_font_size,
            unit,
            config,
            json,
            copy,
        } => generate(GenerateArgs {
            fields: [
                (Field::MinWidth, min_width),
                (Field::MaxWidth, max_width),
                (Field::MinFontSize, min_font_size),
                (Field::MaxFontSize, max_font_size),
            ],
            unit,
            config,
            json,
            copy,
        }),
        Commands::ToPx { expression } => to_px(&expression),
        Commands::Parse { value } => parse_value(&value),
        Commands::ToggleUnit { value, unit } => toggle_unit(&value, &unit),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match &args.config {
        Some(path) => session::Settings::load_from_file(path)?,
        None => session::Settings::default(),
    };

    // Flags win over the config file
    let mut config: Configuration = settings.configuration();
    for (field, value) in args.fields {
        if let Some(value) = value {
            config.set_field(field, value);
        }
    }
    let unit = args.unit.unwrap_or(settings.unit);

    let validation = session::validate_configuration(&config);
    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    let clamp = clamp::build_clamp(&config)?;
    let output = clamp.render(unit);

    if args.json {
        let rendered = clamp::RenderedClamp::from(clamp);
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("{}", output);
    }

    if args.copy {
        copy_output(&output)?;
        eprintln!("Copied {} result to clipboard", unit);
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_output(output: &str) -> Result<(), Box<dyn std::error::Error>> {
    session::clipboard::copy_to_clipboard(output)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn copy_output(_output: &str) -> Result<(), Box<dyn std::error::Error>> {
    Err("Clipboard is not available in WASM builds".into())
}

fn to_px(expression: &str) -> Result<(), Box<dyn std::error::Error>> {
    let px = clamp::to_pixel_expression(expression, clamp::model::ROOT_FONT_SIZE);
    if px == expression {
        return Err(format!("'{}' is not a rem clamp() expression", expression).into());
    }
    println!("{}", px);
    Ok(())
}

fn parse_value(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let dim = unit::parse_unit(value).ok_or_else(|| format!("No number found in '{}'", value))?;

    println!("Value: {}", value);
    println!("Magnitude: {}", dim.magnitude);
    match dim.unit {
        Some(u) => println!("Unit: {}", u),
        None => println!("Unit: (none, read as px)"),
    }
    println!(
        "As rem: {}",
        clamp::normalize_to_rem(dim, clamp::model::ROOT_FONT_SIZE)
    );

    Ok(())
}

fn toggle_unit(value: &str, unit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let unit: Unit = unit.parse()?;
    let dim = unit::parse_unit(value).ok_or_else(|| format!("No number found in '{}'", value))?;
    println!("{}", dim.with_unit(unit));
    Ok(())
}
