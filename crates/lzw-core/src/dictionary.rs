//! Bidirectional sequence <-> code table, seeded with the fixed alphabet.

use crate::alphabet;
use crate::error::{LzwError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Dictionary {
    forward: HashMap<Vec<u8>, u32>,
    // indexed by code; codes are dense from 0
    backward: Vec<Vec<u8>>,
    max_table_size: u64,
}

impl Dictionary {
    /// Fresh dictionary holding only the seeded alphabet.
    pub fn seeded(max_table_size: u64) -> Self {
        let mut dict = Self {
            forward: HashMap::new(),
            backward: Vec::new(),
            max_table_size,
        };
        dict.reset();
        dict
    }

    /// Drop every learned entry and restore the seeded alphabet.
    pub fn reset(&mut self) {
        self.forward.clear();
        self.backward.clear();
        for (code, &symbol) in alphabet::symbols().iter().enumerate() {
            self.forward.insert(vec![symbol], code as u32);
            self.backward.push(vec![symbol]);
        }
    }

    pub fn lookup_forward(&self, sequence: &[u8]) -> Option<u32> {
        self.forward.get(sequence).copied()
    }

    pub fn lookup_backward(&self, code: u32) -> Option<&[u8]> {
        self.backward.get(code as usize).map(Vec::as_slice)
    }

    /// Add `sequence` under `code`, which must be the next free code.
    pub fn insert(&mut self, sequence: Vec<u8>, code: u32) -> Result<()> {
        if self.is_full() {
            return Err(LzwError::Decoding(format!(
                "dictionary is full ({} entries)",
                self.max_table_size
            )));
        }
        if u64::from(code) != self.next_code() {
            return Err(LzwError::UnknownCode {
                code,
                next_code: self.next_code(),
            });
        }
        if self.forward.contains_key(&sequence) {
            return Err(LzwError::Decoding(format!(
                "sequence of {} symbols is already assigned",
                sequence.len()
            )));
        }
        self.forward.insert(sequence.clone(), code);
        self.backward.push(sequence);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.backward.len()
    }

    /// Code the next insertion will receive.
    pub fn next_code(&self) -> u64 {
        self.backward.len() as u64
    }

    pub fn max_table_size(&self) -> u64 {
        self.max_table_size
    }

    /// True once the table holds `max_table_size` entries and stops growing.
    pub fn is_full(&self) -> bool {
        self.next_code() >= self.max_table_size
    }
}
