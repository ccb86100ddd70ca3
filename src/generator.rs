//! The pattern generator: a normalized, invocable list of parts.

use std::fmt;

use crate::parts::Part;

/// A normalized, invocable pattern.
///
/// Built once from an ordered list of parts and invoked any number of
/// times. A generator converts into a [`Part`], so whole patterns nest
/// inside other patterns.
#[derive(Debug, Clone)]
pub struct Generator {
    parts: Vec<Part>,
}

impl Generator {
    /// Builds a generator from `parts`.
    ///
    /// Exact top-level groups are flattened into the child list and no-op
    /// parts are dropped; everything else is kept as-is, so a repeated
    /// group or a nested generator stays a single unit.
    pub fn new(parts: Vec<Part>) -> Generator {
        let mut normalized = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Part::Null => {}
                Part::Group(children) => normalized.extend(children),
                other => normalized.push(other),
            }
        }

        tracing::debug!(parts = normalized.len(), "built pattern generator");
        Generator { parts: normalized }
    }

    /// Generates one random string.
    ///
    /// Output that is not valid UTF-8 (possible only through byte
    /// alphabets reaching outside ASCII) is replaced lossily; use
    /// [`append`](Generator::append) for byte-exact output.
    pub fn generate(&self) -> String {
        let mut out = Vec::with_capacity(100);
        self.append(&mut out);
        match String::from_utf8(out) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Appends one generated pattern to `out`.
    pub fn append(&self, out: &mut Vec<u8>) {
        for part in &self.parts {
            part.append(out);
        }
    }

    /// Returns an unbounded iterator of freshly generated strings.
    pub fn samples(&self) -> Samples<'_> {
        Samples { generator: self }
    }
}

/// Each formatting generates a fresh sample.
impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate())
    }
}

impl From<Generator> for Part {
    fn from(generator: Generator) -> Part {
        Part::Nested(generator)
    }
}

/// Unbounded iterator over generated strings, created by
/// [`Generator::samples`].
#[derive(Debug)]
pub struct Samples<'a> {
    generator: &'a Generator,
}

impl Iterator for Samples<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generator.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
