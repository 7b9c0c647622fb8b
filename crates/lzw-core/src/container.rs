//! Container format: one 4-byte big-endian word per code.
//! No header, no length prefix, no checksum.

use crate::config::{TrailingBytesPolicy, CODE_WIDTH};
use crate::error::{LzwError, Result};
use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::warn;

pub fn to_bytes(codes: &[u32]) -> Vec<u8> {
    let mut buf = vec![0u8; codes.len() * CODE_WIDTH];
    for (word, &code) in buf.chunks_exact_mut(CODE_WIDTH).zip(codes) {
        BigEndian::write_u32(word, code);
    }
    buf
}

pub fn from_bytes(data: &[u8], policy: TrailingBytesPolicy) -> Result<Vec<u32>> {
    let chunks = data.chunks_exact(CODE_WIDTH);
    let trailing = chunks.remainder().len();
    if trailing != 0 {
        match policy {
            TrailingBytesPolicy::Reject => {
                return Err(LzwError::TruncatedContainer {
                    len: data.len(),
                    width: CODE_WIDTH,
                })
            }
            TrailingBytesPolicy::Discard => {
                warn!(trailing, len = data.len(), "discarding partial trailing code");
            }
        }
    }
    Ok(chunks.map(BigEndian::read_u32).collect())
}

pub fn write(codes: &[u32], path: &Path) -> Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    for &code in codes {
        out.write_u32::<BigEndian>(code)?;
    }
    out.flush()?;
    Ok(())
}

pub fn read(path: &Path, policy: TrailingBytesPolicy) -> Result<Vec<u32>> {
    let data = fs::read(path)?;
    from_bytes(&data, policy)
}
