use crate::pipeline::Identifier;
use std::io::{self, BufRead, Lines};

/// Identifiers read one per line; line endings stripped, empty lines skipped.
///
/// Anything else, whitespace included, is passed through verbatim.
pub struct IdentifierReader<R> {
    lines: Lines<R>,
}

impl<R: BufRead> IdentifierReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for IdentifierReader<R> {
    type Item = io::Result<Identifier>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) if line.is_empty() => continue,
                Ok(line) => return Some(Ok(Identifier::new(line))),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
