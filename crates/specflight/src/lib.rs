mod client;
mod console;
mod context;
mod discovery;
mod matcher;
mod options;
mod plugins;
pub mod policy;
pub mod stages;
mod types;
mod verify;

pub use async_trait::async_trait;
pub use client::*;
pub use console::*;
pub use context::*;
pub use discovery::*;
pub use matcher::*;
pub use options::*;
pub use plugins::*;
pub use policy::LimitReason;
pub use types::*;
pub use verify::*;
