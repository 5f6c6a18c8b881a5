use crate::pipeline::Identifier;
use std::io::{self, Write};

/// Operator-facing progress markers, kept apart from the HTML on stdout.
///
/// Every marker is flushed immediately so a stalled request is visible.
pub struct Progress<W: Write> {
    out: W,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn start(&mut self) -> io::Result<()> {
        self.emit(format_args!("Starting"))
    }

    pub fn item(&mut self) -> io::Result<()> {
        self.emit(format_args!("."))
    }

    pub fn error(&mut self, identifier: &Identifier, error: &dyn std::error::Error) -> io::Result<()> {
        self.emit(format_args!("\nERROR with image for {}: {}\n", identifier, error))
    }

    pub fn done(&mut self) -> io::Result<()> {
        self.emit(format_args!("done\n"))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.flush()
    }
}
