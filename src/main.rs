use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tailmatch::error::AppError;
use tailmatch::models::{MatchConfig, MatchResult};
use tailmatch::services::{
    color_info, contrasting_text_color, ColorInfo, ColorMatcher, PaletteStore, PerceptualDistance,
};
use tailmatch::validation::extract_hex_color;

#[derive(Parser)]
#[command(name = "tailmatch")]
#[command(version)]
#[command(about = "Find the closest Tailwind CSS colors for any hex color")]
struct Cli {
    /// YAML file with matching defaults (threshold, count)
    #[arg(long, global = true, env = "TAILMATCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the single closest palette color
    Closest {
        /// Hex color, with or without '#' (e.g. "#ff0000" or "FF0000")
        color: String,

        /// Maximum distance for a match (overrides config)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the closest palette colors within a threshold
    Matches {
        /// Hex color, with or without '#'
        color: String,

        /// Maximum number of results (overrides config)
        #[arg(short, long)]
        count: Option<usize>,

        /// Maximum distance for a match (overrides config)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Suggest the twelve nearest palette colors, regardless of distance
    Family {
        /// Hex color, with or without '#'
        color: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a color in RGB, HSL, Lab and LCh with its closest match
    Info {
        /// Hex color, with or without '#'
        color: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the reference palette
    Palette {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ClosestOutput<'a> {
    query: &'a str,
    threshold: f64,
    #[serde(rename = "match")]
    result: Option<MatchResult<'a>>,
}

#[derive(Serialize)]
struct MatchesOutput<'a> {
    query: &'a str,
    count: usize,
    threshold: f64,
    matches: Vec<MatchResult<'a>>,
}

#[derive(Serialize)]
struct FamilyOutput<'a> {
    query: &'a str,
    suggestions: Vec<MatchResult<'a>>,
}

#[derive(Serialize)]
struct InfoOutput<'a> {
    #[serde(flatten)]
    info: ColorInfo,
    text_color: &'static str,
    closest: Option<MatchResult<'a>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tailmatch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Closest {
            color,
            threshold,
            json,
        }) => {
            let config = load_config(config_path)?;
            run_closest_command(&color, threshold.unwrap_or(config.threshold), json)
        }
        Some(Commands::Matches {
            color,
            count,
            threshold,
            json,
        }) => {
            let config = load_config(config_path)?;
            let config = MatchConfig {
                threshold: threshold.unwrap_or(config.threshold),
                count: count.unwrap_or(config.count),
            };
            run_matches_command(&color, &config, json)
        }
        Some(Commands::Family { color, json }) => run_family_command(&color, json),
        Some(Commands::Info { color, json }) => {
            let config = load_config(config_path)?;
            run_info_command(&color, &config, json)
        }
        Some(Commands::Palette { json }) => run_palette_command(json),
        None => {
            run_status_command(config_path);
            Ok(())
        }
    }
}

/// Config from an explicit path; defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<MatchConfig, AppError> {
    match path {
        Some(path) => Ok(MatchConfig::load(path)?),
        None => Ok(MatchConfig::default()),
    }
}

/// Validate and normalize a color argument.
fn parse_color_arg(input: &str) -> Result<String, AppError> {
    extract_hex_color(input).ok_or_else(|| AppError::InvalidColor(input.to_string()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn describe(m: &MatchResult<'_>) -> String {
    format!(
        "{:<14} {}  distance {:>6.2}  similarity {:>5.1}%",
        m.entry.name, m.entry.hex, m.distance, m.similarity
    )
}

fn run_closest_command(color: &str, threshold: f64, json: bool) -> anyhow::Result<()> {
    let query = parse_color_arg(color)?;
    let store = PaletteStore::tailwind();
    let matcher = ColorMatcher::new(&store, PerceptualDistance::new());
    let result = matcher.find_closest(&query, threshold);

    if json {
        return print_json(&ClosestOutput {
            query: &query,
            threshold,
            result,
        });
    }

    match result {
        Some(m) if m.is_exact() => {
            println!("{query} is exactly {} ({})", m.entry.name, m.entry.class_name)
        }
        Some(m) => println!("{}", describe(&m)),
        None => println!("No palette color within distance {threshold} of {query}"),
    }
    Ok(())
}

fn run_matches_command(color: &str, config: &MatchConfig, json: bool) -> anyhow::Result<()> {
    let query = parse_color_arg(color)?;
    let store = PaletteStore::tailwind();
    let matcher = ColorMatcher::new(&store, PerceptualDistance::new());
    let matches = matcher.find_multiple_with(&query, config);

    if json {
        return print_json(&MatchesOutput {
            query: &query,
            count: config.count,
            threshold: config.threshold,
            matches,
        });
    }

    if matches.is_empty() {
        println!(
            "No palette colors within distance {} of {query}",
            config.threshold
        );
        return Ok(());
    }

    println!("Closest palette colors to {query}:");
    for (i, m) in matches.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, describe(m));
    }
    Ok(())
}

fn run_family_command(color: &str, json: bool) -> anyhow::Result<()> {
    let query = parse_color_arg(color)?;
    let store = PaletteStore::tailwind();
    let matcher = ColorMatcher::new(&store, PerceptualDistance::new());
    let suggestions = matcher.find_family_suggestions(&query);

    if json {
        return print_json(&FamilyOutput {
            query: &query,
            suggestions,
        });
    }

    println!("Palette colors near {query}:");
    for (i, m) in suggestions.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, describe(m));
    }
    Ok(())
}

fn run_info_command(color: &str, config: &MatchConfig, json: bool) -> anyhow::Result<()> {
    let query = parse_color_arg(color)?;
    let info = color_info(&query).ok_or_else(|| AppError::InvalidColor(color.to_string()))?;
    let store = PaletteStore::tailwind();
    let matcher = ColorMatcher::new(&store, PerceptualDistance::new());
    let closest = matcher.find_closest_with(&query, config);
    let text_color = contrasting_text_color(&query);

    if json {
        return print_json(&InfoOutput {
            info,
            text_color,
            closest,
        });
    }

    let [r, g, b] = info.rgb;
    let [h, s, l] = info.hsl;
    let [lab_l, lab_a, lab_b] = info.lab;
    let [lch_l, lch_c, lch_h] = info.lch;

    println!("Color:      {}", info.hex);
    println!("RGB:        {r}, {g}, {b}");
    println!("HSL:        {h:.1}°, {:.1}%, {:.1}%", s * 100.0, l * 100.0);
    println!("Lab:        {lab_l:.2}, {lab_a:.2}, {lab_b:.2}");
    println!("LCh:        {lch_l:.2}, {lch_c:.2}, {lch_h:.1}°");
    println!("Luminance:  {:.4}", info.luminance);
    println!("Text color: {text_color}");
    match closest {
        Some(m) => println!("Closest:    {}", describe(&m)),
        None => println!("Closest:    none within distance {}", config.threshold),
    }
    Ok(())
}

fn run_palette_command(json: bool) -> anyhow::Result<()> {
    let store = PaletteStore::tailwind();

    if json {
        return print_json(&store.palette());
    }

    for entry in store.palette() {
        println!("{:<14} {}  {}", entry.name, entry.hex, entry.class_name);
    }
    Ok(())
}

/// Show version, configuration and palette summary
fn run_status_command(config_path: Option<&Path>) {
    let version = env!("CARGO_PKG_VERSION");
    let config = MatchConfig::load_or_default(config_path);
    let store = PaletteStore::tailwind();

    println!("tailmatch v{version}");
    println!();

    println!("Configuration:");
    match config_path {
        Some(path) => println!("  Source:    {}", path.display()),
        None => println!("  Source:    defaults"),
    }
    println!("  Threshold: {}", config.threshold);
    println!("  Count:     {}", config.count);

    println!("\nPalette:");
    println!("  Tailwind CSS ({} colors)", store.len());

    println!("\nCommands:");
    println!("  tailmatch closest <COLOR>   Find the closest palette color");
    println!("  tailmatch matches <COLOR>   List close palette colors");
    println!("  tailmatch family <COLOR>    Suggest nearby palette colors");
    println!("  tailmatch info <COLOR>      Describe a color");
    println!("  tailmatch palette           Print the palette");
    println!("\nRun 'tailmatch --help' for more details.");
}
