//! File-level compress / decompress, wiring all stages together.

use crate::config::LzwConfig;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{LzwError, Result};
use crate::{canonical, container};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics for one compress or decompress call.
#[derive(Debug, Clone)]
pub struct CompressionStats {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Size of the raw (uncompressed) payload in bytes.
    pub original_len: usize,
    pub canonical_len: usize,
    pub code_count: usize,
    /// Size of the container file in bytes.
    pub compressed_len: usize,
    pub elapsed: Duration,
}

impl CompressionStats {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.compressed_len as f64 / self.original_len as f64
    }
}

/// Final path component, honouring both `/` and `\` separators.
///
/// Works on the encoded bytes so non-UTF-8 names survive unchanged.
pub fn base_name(path: &Path) -> OsString {
    let Some(name) = path.file_name() else {
        return OsString::new();
    };
    let bytes = name.as_encoded_bytes();
    let tail = match bytes.iter().rposition(|&b| b == b'\\') {
        Some(pos) => &bytes[pos + 1..],
        None => bytes,
    };
    // SAFETY: `\` is ASCII, so `tail` starts right after a valid UTF-8 substring.
    unsafe { OsStr::from_encoded_bytes_unchecked(tail) }.to_owned()
}

/// Stateless codec; every call seeds its own dictionary.
#[derive(Debug, Clone, Default)]
pub struct LzwCodec {
    config: LzwConfig,
}

impl LzwCodec {
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    pub fn compress_bytes(&self, bytes: &[u8]) -> Result<Vec<u32>> {
        let text = canonical::to_text(bytes)?;
        Encoder::new(self.config.max_table_size()).encode(text.as_bytes())
    }

    pub fn decompress_codes(&self, codes: &[u32]) -> Result<Vec<u8>> {
        let text = Decoder::new(self.config.max_table_size()).decode(codes)?;
        canonical::to_bytes(&text)
    }

    /// Path `compress_file` writes for `input` inside `output_dir`.
    pub fn compressed_path(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let mut name = base_name(input);
        if name.is_empty() {
            return Err(LzwError::InvalidInput(format!(
                "{} has no file name",
                input.display()
            )));
        }
        name.push(&self.config.extension);
        Ok(output_dir.join(name))
    }

    /// Path `decompress_file` writes for `input` inside `output_dir`.
    pub fn decompressed_path(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let name = base_name(input);
        let stem = name
            .as_encoded_bytes()
            .strip_suffix(self.config.extension.as_bytes());
        match stem {
            // SAFETY: the removed suffix is a whole UTF-8 string.
            Some(stem) if !stem.is_empty() => {
                Ok(output_dir.join(unsafe { OsStr::from_encoded_bytes_unchecked(stem) }))
            }
            _ => Err(LzwError::InvalidInput(format!(
                "{} does not carry the {} extension",
                input.display(),
                self.config.extension
            ))),
        }
    }

    /// Compress `input` into `output_dir/<name><extension>`.
    pub fn compress_file(&self, input: &Path, output_dir: &Path) -> Result<CompressionStats> {
        let started = Instant::now();
        if !input.is_file() {
            return Err(LzwError::InvalidInput(format!(
                "{} is not found",
                input.display()
            )));
        }
        let output = self.compressed_path(input, output_dir)?;

        let bytes = std::fs::read(input)?;
        let text = canonical::to_text(&bytes)?;
        debug!(bytes = bytes.len(), symbols = text.len(), "canonicalized input");
        let mut encoder = Encoder::new(self.config.max_table_size());
        let codes = encoder.encode(text.as_bytes())?;
        container::write(&codes, &output)?;

        let stats = CompressionStats {
            input: input.to_path_buf(),
            output,
            original_len: bytes.len(),
            canonical_len: text.len(),
            code_count: codes.len(),
            compressed_len: codes.len() * crate::config::CODE_WIDTH,
            elapsed: started.elapsed(),
        };
        info!(
            input = %stats.input.display(),
            output = %stats.output.display(),
            ratio = stats.ratio(),
            "compressed file"
        );
        Ok(stats)
    }

    /// Decompress `input` (which must end with the extension) into `output_dir`.
    pub fn decompress_file(&self, input: &Path, output_dir: &Path) -> Result<CompressionStats> {
        let started = Instant::now();
        if !input.is_file() {
            return Err(LzwError::InvalidInput(format!(
                "{} is not found",
                input.display()
            )));
        }
        let output = self.decompressed_path(input, output_dir)?;

        let raw = std::fs::read(input)?;
        let codes = container::from_bytes(&raw, self.config.trailing_bytes)?;
        let text = Decoder::new(self.config.max_table_size()).decode(&codes)?;
        let bytes = canonical::to_bytes(&text)?;
        std::fs::write(&output, &bytes)?;

        let stats = CompressionStats {
            input: input.to_path_buf(),
            output,
            original_len: bytes.len(),
            canonical_len: text.len(),
            code_count: codes.len(),
            compressed_len: raw.len(),
            elapsed: started.elapsed(),
        };
        info!(
            input = %stats.input.display(),
            output = %stats.output.display(),
            bytes = stats.original_len,
            "decompressed file"
        );
        Ok(stats)
    }
}

/// Compress with the default configuration.
pub fn compress(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<CompressionStats> {
    LzwCodec::default().compress_file(input.as_ref(), output_dir.as_ref())
}

/// Decompress with the default configuration.
pub fn decompress(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<CompressionStats> {
    LzwCodec::default().decompress_file(input.as_ref(), output_dir.as_ref())
}
