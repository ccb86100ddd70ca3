//! Uniform choice from a fixed alphabet.
//!
//! Four alphabet shapes share the same selection scheme: one
//! [`uniform_u32`](crate::random::uniform_u32) draw over the alphabet
//! length picks the entry to append. Alphabets are fixed at construction
//! and must hold fewer than 2^32 entries.

use crate::error::PatternError;
use crate::parts::Part;
use crate::random;

/// Uniform choice between sub-parts.
#[derive(Debug, Clone)]
pub struct OneOf {
    parts: Vec<Part>,
    len: u32,
}

impl OneOf {
    pub(crate) fn append(&self, out: &mut Vec<u8>) {
        let n = random::uniform_u32(self.len);
        self.parts[n as usize].append(out);
    }
}

/// Uniform choice of a single byte.
#[derive(Debug, Clone)]
pub struct OneOfBytes {
    alphabet: Vec<u8>,
    len: u32,
}

impl OneOfBytes {
    pub(crate) fn append(&self, out: &mut Vec<u8>) {
        let n = random::uniform_u32(self.len);
        out.push(self.alphabet[n as usize]);
    }
}

/// Uniform choice of a single character, appended as UTF-8.
#[derive(Debug, Clone)]
pub struct OneOfChars {
    alphabet: Vec<char>,
    len: u32,
}

impl OneOfChars {
    pub(crate) fn append(&self, out: &mut Vec<u8>) {
        let n = random::uniform_u32(self.len);
        let mut utf8 = [0u8; 4];
        let encoded = self.alphabet[n as usize].encode_utf8(&mut utf8);
        out.extend_from_slice(encoded.as_bytes());
    }
}

/// Uniform choice of a whole string.
#[derive(Debug, Clone)]
pub struct OneOfStrings {
    alphabet: Vec<String>,
    len: u32,
}

impl OneOfStrings {
    pub(crate) fn append(&self, out: &mut Vec<u8>) {
        let n = random::uniform_u32(self.len);
        out.extend_from_slice(self.alphabet[n as usize].as_bytes());
    }
}

impl Part {
    /// Returns a part that appends one of `parts`, each equally likely.
    ///
    /// A choice of one part is just that part and spends no randomness.
    ///
    /// # Errors
    ///
    /// Fails when `parts` is empty.
    pub fn one_of(mut parts: Vec<Part>) -> Result<Part, PatternError> {
        if parts.is_empty() {
            return Err(PatternError::EmptyAlphabet);
        }
        if parts.len() == 1 {
            return Ok(parts.swap_remove(0));
        }

        let len = parts.len() as u32;
        Ok(Part::OneOf(OneOf { parts, len }))
    }

    /// Returns a part that appends one byte of `alphabet`, each equally
    /// likely.
    ///
    /// Bytes are appended as-is; an alphabet with bytes outside ASCII can
    /// produce output that is not valid UTF-8, which the byte-level
    /// [`append`](Part::append) preserves exactly.
    ///
    /// # Errors
    ///
    /// Fails when `alphabet` is empty.
    pub fn one_of_bytes(alphabet: &[u8]) -> Result<Part, PatternError> {
        if alphabet.is_empty() {
            return Err(PatternError::EmptyAlphabet);
        }

        Ok(Part::OneOfBytes(OneOfBytes {
            len: alphabet.len() as u32,
            alphabet: alphabet.to_vec(),
        }))
    }

    /// Returns a part that appends one character of `alphabet`, each
    /// equally likely.
    ///
    /// # Errors
    ///
    /// Fails when `alphabet` is empty.
    pub fn one_of_chars(alphabet: &str) -> Result<Part, PatternError> {
        let alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(PatternError::EmptyAlphabet);
        }

        Ok(Part::OneOfChars(OneOfChars {
            len: alphabet.len() as u32,
            alphabet,
        }))
    }

    /// Returns a part that appends one of `alphabet`, each equally likely.
    ///
    /// # Errors
    ///
    /// Fails when `alphabet` is empty.
    pub fn one_of_strings(alphabet: &[&str]) -> Result<Part, PatternError> {
        if alphabet.is_empty() {
            return Err(PatternError::EmptyAlphabet);
        }

        Ok(Part::OneOfStrings(OneOfStrings {
            len: alphabet.len() as u32,
            alphabet: alphabet.iter().map(|s| s.to_string()).collect(),
        }))
    }
}
