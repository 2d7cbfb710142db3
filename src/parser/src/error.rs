use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to open or read '{0}'")]
    Io(String, #[source] std::io::Error),

    #[error(transparent)]
    Genome(#[from] genome::GenomeError),
}
