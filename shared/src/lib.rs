// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid key: {0}")]
    InvalidKey(&'static str),
    #[error("storage: {0}")]
    Storage(String),
    #[error("batch failed at index {index}: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap a per-item failure with its position in a batch.
    pub fn at_index(self, index: usize) -> Self {
        Error::Batch {
            index,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
