mod branch_match;
mod build;
mod commit;
mod envs;
mod error;
pub mod exit_code;
mod only_filter;
mod spec;
mod task_state;

pub use branch_match::*;
pub use build::*;
pub use commit::*;
pub use envs::*;
pub use error::*;
pub use only_filter::*;
pub use spec::*;
pub use task_state::*;
