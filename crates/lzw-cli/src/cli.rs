use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lzw", about = "Lossless LZW file compressor", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Code width in bits (7..=32); must match between compress and decompress
    #[arg(long, global = true)]
    pub bits: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress FILE into PATH/<name>.lzw
    Compress {
        /// Input file
        file: PathBuf,

        /// Directory for the compressed file (defaults to the current directory)
        path: Option<PathBuf>,

        /// Show lead time
        #[arg(short = 't', long = "time")]
        time: bool,
    },

    /// Decompress a .lzw FILE into PATH
    Decompress {
        /// Input .lzw file
        file: PathBuf,

        /// Directory for the restored file (defaults to the current directory)
        path: Option<PathBuf>,

        /// Show lead time
        #[arg(short = 't', long = "time")]
        time: bool,
    },
}
