use std::ffi::OsStr;
use std::path::Path;

use located_error::LocatedError;
use log::debug;

mod error;
pub use error::ParserError;

mod source;
pub use source::FileSource;

mod parser;
pub use parser::parse_into;

/// Load a 23andMe raw genotype file into a populated [`genome::Genome`].
///
/// Opens `path` via [`FileSource`] (memory-mapped, falling back to a
/// slurped buffer), then scans it once with [`parse_into`]. Succeeds on a
/// truly empty file (an empty `Genome` is returned); only a store overflow
/// or an unreadable file causes this to fail.
///
/// # Errors
/// An `anyhow::Error` wrapping [`ParserError::Io`] if the file cannot be
/// opened, or [`ParserError::Genome`] if the store fills up during parsing.
pub fn load(path: impl AsRef<Path>) -> anyhow::Result<genome::Genome> {
    let path = path.as_ref();
    let source = FileSource::open(path).with_loc(|| format!("While opening '{}'", path.display()))?;

    let name = path.file_name().and_then(OsStr::to_str).unwrap_or("genome").to_string();
    debug!("Parsing '{}' ({} bytes)", path.display(), source.as_bytes().len());

    let mut genome = genome::Genome::new(genome::StoreConfig::default(), name);
    parse_into(source.as_bytes(), &mut genome).with_loc(|| format!("While parsing '{}'", path.display()))?;

    Ok(genome)
}
