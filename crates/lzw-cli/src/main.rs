mod cli;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use error::{exit_with_error, CliError, CliResult};
use lzw_core::{CompressionStats, LzwCodec, LzwConfig};
use std::path::{Path, PathBuf};
use tracing::warn;

fn init_tracing(cli: &Cli) {
    // --quiet silences everything, --verbose shows info unless RUST_LOG says
    // otherwise, and the default honours RUST_LOG with a warn floor.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn load_config(cli: &Cli) -> CliResult<LzwConfig> {
    let mut config = match &cli.config {
        Some(path) => LzwConfig::from_json_file(path)?,
        None => LzwConfig::default(),
    };
    if let Some(bits) = cli.bits {
        config = config.with_code_bits(bits);
    }
    Ok(config)
}

/// Output directory, falling back to the current directory when `path` is
/// omitted, names a regular file, or does not exist.
fn resolve_output_dir(path: Option<&Path>) -> PathBuf {
    match path {
        Some(dir) if dir.is_dir() => dir.to_path_buf(),
        Some(other) => {
            warn!(
                path = %other.display(),
                "output directory is not usable, writing to the current directory"
            );
            PathBuf::from(".")
        }
        None => PathBuf::from("."),
    }
}

fn require_input(file: &Path) -> CliResult<()> {
    if !file.is_file() {
        return Err(CliError::Usage(format!(
            "file is not found: {}",
            file.display()
        )));
    }
    Ok(())
}

fn report(label: &str, stats: &CompressionStats, time: bool) {
    println!("{label} - Success: {}", stats.output.display());
    if time {
        println!("{label} - Lead time: {:.3}s.", stats.elapsed.as_secs_f64());
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let codec = LzwCodec::new(load_config(&cli)?)?;

    match &cli.command {
        Commands::Compress { file, path, time } => {
            require_input(file)?;
            let output_dir = resolve_output_dir(path.as_deref());
            let stats = codec.compress_file(file, &output_dir)?;
            report("Compress", &stats, *time);
        }
        Commands::Decompress { file, path, time } => {
            require_input(file)?;
            let extension = &codec.config().extension;
            let name = lzw_core::codec::base_name(file);
            if !name.as_encoded_bytes().ends_with(extension.as_bytes()) {
                return Err(CliError::Usage(format!(
                    "need a {extension} file: {}",
                    file.display()
                )));
            }
            let output_dir = resolve_output_dir(path.as_deref());
            let stats = codec.decompress_file(file, &output_dir)?;
            report("Decompress", &stats, *time);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
