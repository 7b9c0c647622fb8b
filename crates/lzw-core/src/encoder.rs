//! Greedy longest-match LZW encoder over canonical text.

use crate::dictionary::Dictionary;
use crate::error::{LzwError, Result};
use tracing::{debug, warn};

pub struct Encoder {
    dict: Dictionary,
}

impl Encoder {
    pub fn new(max_table_size: u64) -> Self {
        Self {
            dict: Dictionary::seeded(max_table_size),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Encode `text` into a code stream, growing the dictionary as it goes.
    pub fn encode(&mut self, text: &[u8]) -> Result<Vec<u32>> {
        let mut codes = Vec::new();
        let mut prefix: Vec<u8> = Vec::new();
        let mut cap_logged = false;

        for &symbol in text {
            prefix.push(symbol);
            if self.dict.lookup_forward(&prefix).is_some() {
                continue;
            }
            // prefix now holds the candidate; emit the longest known match
            let candidate = prefix.clone();
            prefix.pop();
            if prefix.is_empty() {
                return Err(LzwError::Encoding(format!(
                    "symbol {symbol:#04x} has no seeded entry"
                )));
            }
            codes.push(self.code_for(&prefix)?);

            if !self.dict.is_full() {
                let code = self.dict.next_code() as u32;
                self.dict.insert(candidate, code)?;
            } else if !cap_logged {
                warn!(
                    entries = self.dict.size(),
                    "dictionary reached its maximum size, no further entries will be learned"
                );
                cap_logged = true;
            }

            prefix.clear();
            prefix.push(symbol);
        }

        if !prefix.is_empty() {
            codes.push(self.code_for(&prefix)?);
        }

        debug!(
            symbols = text.len(),
            codes = codes.len(),
            entries = self.dict.size(),
            "encoded canonical text"
        );
        Ok(codes)
    }

    fn code_for(&self, sequence: &[u8]) -> Result<u32> {
        self.dict.lookup_forward(sequence).ok_or_else(|| match sequence {
            [symbol] => LzwError::Encoding(format!(
                "symbol {symbol:#04x} has no seeded entry"
            )),
            _ => LzwError::Encoding(format!(
                "pending sequence of {} symbols is not in the dictionary",
                sequence.len()
            )),
        })
    }
}
