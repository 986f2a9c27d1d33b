pub mod checks;
pub mod client;
pub mod error;
pub mod probe;
pub mod settings;

#[cfg(test)]
mod testutil;

pub use checks::{run, Credentials, RunContext};
pub use client::Client;
pub use error::ToolError;
pub use probe::{JobProbe, StatusCommandProbe};
pub use settings::Settings;
