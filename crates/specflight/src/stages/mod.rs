//! Stages of a verification run. Each stage takes the context by value and
//! returns it enriched, or the error that ends the run.

pub mod discovery;
pub mod environment;
pub mod submit;
