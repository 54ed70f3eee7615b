use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inklogo::models::{ConvertConfig, FailurePolicy, ProfileFile, DEFAULT_SCALE};
use inklogo::services::{AssetWriter, Converter, DEFAULT_VAR_NAME};

const DEFAULT_SRC_DIR: &str = "firmware/src/images";
const DEFAULT_INC_DIR: &str = "firmware/include/images";

#[derive(Parser)]
#[command(name = "inklogo")]
#[command(about = "Convert a logo into compressed 1-bit bitmaps for e-ink firmware")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image and write the firmware assets
    Convert {
        /// Source image (PNG, JPEG, GIF, ...)
        input: PathBuf,

        /// Fraction of the display the logo may cover, in (0, 1]
        #[arg(short, long)]
        scale: Option<f64>,

        /// Directory for the generated .cpp files
        #[arg(long, default_value = DEFAULT_SRC_DIR)]
        out_src: PathBuf,

        /// Directory for the generated .h files
        #[arg(long, default_value = DEFAULT_INC_DIR)]
        out_inc: PathBuf,

        /// YAML file replacing the built-in profile table
        #[arg(short, long)]
        profiles: Option<PathBuf>,

        /// Skip profiles that fail instead of aborting the whole run
        #[arg(long)]
        keep_going: bool,

        /// Convert profiles one after another instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Base name of the generated C++ symbols
        #[arg(long, default_value = DEFAULT_VAR_NAME)]
        var_name: String,

        /// Skip decoding the compressed output to check it
        #[arg(long)]
        no_verify: bool,

        /// Only log warnings and errors
        #[arg(short, long)]
        quiet: bool,
    },
    /// List the active hardware profiles
    Profiles {
        /// YAML file replacing the built-in profile table
        #[arg(short, long)]
        profiles: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            scale,
            out_src,
            out_inc,
            profiles,
            keep_going,
            sequential,
            var_name,
            no_verify,
            quiet,
        }) => {
            init_logging(quiet);

            let mut config = load_config(profiles.as_deref())?;
            if let Some(scale) = scale {
                config.scale = scale;
            }
            if keep_going {
                config.failure_policy = FailurePolicy::SkipFailed;
            }
            config.parallel = !sequential;
            config.verify = !no_verify;

            let writer = AssetWriter::new(out_src, out_inc).var_name(var_name);
            run_convert_command(&input, config, &writer)
        }
        Some(Commands::Profiles { profiles }) => {
            init_logging(true);
            run_profiles_command(profiles.as_deref())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging(quiet: bool) {
    let default = if quiet { "inklogo=warn" } else { "inklogo=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config(profiles: Option<&Path>) -> anyhow::Result<ConvertConfig> {
    match profiles {
        Some(path) => Ok(ConvertConfig::from_profile_file(ProfileFile::load(path)?)),
        None => Ok(ConvertConfig::default()),
    }
}

/// Convert one image for every profile and write the .cpp/.h pairs
fn run_convert_command(
    input: &Path,
    config: ConvertConfig,
    writer: &AssetWriter,
) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let converter = Converter::new(config)?;

    println!("Processing '{}'...", input.display());
    let report = converter.convert_bytes(&bytes)?;

    for artifact in &report.artifacts {
        writer.write(artifact)?;

        println!("  {}:", artifact.profile.name);
        println!(
            "    Initial:    {}x{} ({} bytes)",
            report.source_width,
            report.source_height,
            bytes.len()
        );
        println!(
            "    Resized:    {}x{} ({} bytes, 1-bit raw)",
            artifact.width, artifact.height, artifact.raw_len
        );
        println!(
            "    Compressed: {} bytes (RLE)",
            artifact.compressed_len()
        );
        println!(
            "    Reduction:  {:.1}% from 1-bit buffer\n",
            artifact.reduction_percent()
        );
    }

    for failure in &report.failures {
        eprintln!("  {}: skipped ({})", failure.profile, failure.error);
    }

    println!("Operation completed.");
    Ok(())
}

fn run_profiles_command(profiles: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(profiles)?;
    config.validate()?;

    println!(
        "{:<16} {:>10}  {:<24} {}",
        "NAME", "MAX SIZE", "DEVICE FLAG", "OUTPUT"
    );
    for profile in &config.profiles {
        println!(
            "{:<16} {:>10}  {:<24} {}",
            profile.name,
            format!("{}x{}", profile.max_width, profile.max_height),
            profile.device_flag,
            profile.output_name
        );
    }
    println!("\nScale: {}", config.scale);
    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("inklogo v{VERSION}");
    println!("Compressed 1-bit logos for e-ink firmware\n");

    println!("Defaults:");
    println!("  scale    = {DEFAULT_SCALE}");
    println!("  out-src  = {DEFAULT_SRC_DIR}");
    println!("  out-inc  = {DEFAULT_INC_DIR}");
    println!("  var-name = {DEFAULT_VAR_NAME}");

    println!("\nBuilt-in profiles:");
    for profile in ConvertConfig::default().profiles {
        println!(
            "  {:<16} {}x{} -> {}.cpp ({})",
            profile.name,
            profile.max_width,
            profile.max_height,
            profile.output_name,
            profile.device_flag
        );
    }

    println!("\nCommands:");
    println!("  inklogo convert <INPUT>   Convert an image and write firmware assets");
    println!("  inklogo profiles          List the active hardware profiles");
    println!("\nRun 'inklogo --help' for all options.");
}
