use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SNP store is full (capacity {0} reached); construct Genome with a larger expected_count hint")]
    Full(usize),
}
