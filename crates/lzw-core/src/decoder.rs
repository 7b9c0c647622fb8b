//! LZW decoder: expands a code stream back into canonical text.

use crate::dictionary::Dictionary;
use crate::error::{LzwError, Result};
use tracing::debug;

pub struct Decoder {
    dict: Dictionary,
}

impl Decoder {
    pub fn new(max_table_size: u64) -> Self {
        Self {
            dict: Dictionary::seeded(max_table_size),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Decode `codes`, rebuilding the encoder's dictionary in lockstep.
    ///
    /// A code equal to the next free code is the self-referential case: its
    /// entry is the previous entry extended by its own first symbol.
    pub fn decode(&mut self, codes: &[u32]) -> Result<Vec<u8>> {
        let mut text = Vec::new();
        let mut previous: Option<Vec<u8>> = None;

        for &code in codes {
            let entry = match (self.dict.lookup_backward(code), previous.as_ref()) {
                (Some(known), _) => known.to_vec(),
                (None, Some(prev))
                    if u64::from(code) == self.dict.next_code() && !self.dict.is_full() =>
                {
                    let mut entry = prev.clone();
                    entry.push(prev[0]);
                    entry
                }
                (None, _) => {
                    return Err(LzwError::UnknownCode {
                        code,
                        next_code: self.dict.next_code(),
                    })
                }
            };

            text.extend_from_slice(&entry);

            if let Some(mut learned) = previous.take() {
                if !self.dict.is_full() {
                    learned.push(entry[0]);
                    let next = self.dict.next_code() as u32;
                    self.dict.insert(learned, next)?;
                }
            }
            previous = Some(entry);
        }

        debug!(
            codes = codes.len(),
            symbols = text.len(),
            entries = self.dict.size(),
            "decoded code stream"
        );
        Ok(text)
    }
}
