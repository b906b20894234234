//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file
//!     → loader.rs (parse & deserialize)
//!     → cli.rs (command-line overrides)
//!     → validation.rs (semantic checks)
//!     → PingerConfig (validated, immutable)
//!     → passed by value into each component's constructor
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the process starts
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::ConfigError;
pub use schema::{CarbonConfig, ObservabilityConfig, PingerConfig, ProbeConfig};
