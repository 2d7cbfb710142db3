use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("no entry for genotype '{0}' (neither direct, reversed, nor default)")]
    NoMatch(String),
}
