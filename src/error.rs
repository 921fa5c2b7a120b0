use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("blade index out of range: {0} (expected 0..=3)")]
    InvalidIndex(usize),

    #[error("cannot normalize a multivector with zero or non-finite norm")]
    ZeroNorm,
}

pub type Result<T> = std::result::Result<T, Error>;
