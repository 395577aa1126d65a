/*!
# IO utilities

Writing of tokenized output files.
!*/
mod writer;
pub use writer::WakachiWriter;
