//! Pipeline trait.
use crate::error::Error;

/// Implemented by batch processors,
/// generic over the return type so that a run can report
/// what it has done.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
