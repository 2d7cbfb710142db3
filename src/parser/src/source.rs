use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::ParserError;

/// A read-only byte view over an input file.
///
/// Memory-maps the file when possible, since this avoids a full
/// kernel-to-userspace copy of what can be a several hundred megabyte
/// 23andMe export. Falls back to reading the whole file into a heap
/// buffer when mapping isn't available (e.g. a zero-length file, or an
/// exotic filesystem that rejects mmap).
pub enum FileSource {
    Mapped(memmap2::Mmap),
    Slurped(Vec<u8>),
}

impl FileSource {
    /// # Errors
    /// [`ParserError::Io`] if the file cannot be opened or read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParserError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ParserError::Io(path.display().to_string(), e))?;

        // SAFETY: the mapping is read-only and outlives no concurrent writer we control;
        // a file truncated by another process during parsing is the caller's problem, as
        // it would be for any process holding the file open.
        match unsafe { memmap2::Mmap::map(&file) } {
            Ok(mmap) => {
                let _ = mmap.advise(memmap2::Advice::Sequential);
                Ok(Self::Mapped(mmap))
            }
            Err(_) => {
                let mut file = file;
                let mut buf = Vec::new();
                file.read_to_end(&mut buf).map_err(|e| ParserError::Io(path.display().to_string(), e))?;
                Ok(Self::Slurped(buf))
            }
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => &mmap[..],
            Self::Slurped(buf) => &buf[..],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn opens_and_reads_back_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello genome\n").unwrap();

        let source = FileSource::open(file.path()).unwrap();
        assert_eq!(source.as_bytes(), b"hello genome\n");
    }

    #[test]
    fn missing_file_errors() {
        assert!(FileSource::open("/nonexistent/path/does-not-exist.txt").is_err());
    }

    #[test]
    fn empty_file_yields_empty_view() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = FileSource::open(file.path()).unwrap();
        assert_eq!(source.as_bytes(), b"");
    }
}
