/*! Batch processing

Walks the corpus sub folders and writes one wakachi file per folder.
See [Wakachi] for the processing details.
!*/
mod config;
pub mod pipeline;
mod wakachi;

pub use config::Config;
pub use pipeline::Pipeline;
pub use wakachi::{Summary, Wakachi};
