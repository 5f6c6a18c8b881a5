use crate::pipeline::Identifier;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Identifiers whose cover was judged not useful, one per line.
///
/// Meant as input for the job that switches those items to a title-page
/// thumbnail. Each record is flushed as soon as it is written, so an aborted
/// run still leaves every decision made so far on disk.
pub struct TitlePageList<W: Write> {
    out: W,
    recorded: usize,
}

impl TitlePageList<BufWriter<File>> {
    /// Create (or truncate) the list file
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TitlePageList<W> {
    pub fn new(out: W) -> Self {
        Self { out, recorded: 0 }
    }

    pub fn record(&mut self, identifier: &Identifier) -> io::Result<()> {
        writeln!(self.out, "{}", identifier)?;
        self.out.flush()?;
        self.recorded += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.recorded
    }

    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_records_in_order() {
        let mut list = TitlePageList::new(Vec::new());
        list.record(&Identifier::from("first")).unwrap();
        list.record(&Identifier::from("second")).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.finish().unwrap(), b"first\nsecond\n");
    }

    #[test]
    fn test_file_is_readable_before_finish() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("title_page_ids.txt");

        let mut list = TitlePageList::create(&path).unwrap();
        assert!(list.is_empty());
        list.record(&Identifier::from("cloth01")).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cloth01\n");
        drop(list);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cloth01\n");
    }
}
