// ATS keyword engine: tokenizer, overlap scorer, frequency comparison.
// Everything except `handlers` is synchronous and free of I/O.

pub mod analysis;
pub mod frequency;
pub mod handlers;
pub mod keywords;
pub mod scoring;
