//! Composable settings presets for EVM build tooling.
//!
//! This crate combines built-in defaults for a compiler toolchain, a code
//! formatter, and a coverage tool with caller-supplied overrides, so setup
//! files only spell out what differs from the defaults. Settings are plain
//! `serde_json::Value` trees combined by a generic deep merge: mappings
//! merge by key, sequences append (defaults first), and scalars are
//! replaced by the override.
//!
//! ```no_run
//! use evm_settings::presets::toolchain;
//! use evm_settings::Environment;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let env = Environment::load()?;
//! let settings = toolchain::settings(&env, Some(&json!({
//!     "defaultNetwork": "matic",
//! })))?;
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod merge;
pub mod presets;

pub use env::{EnvError, Environment, Secrets};
pub use merge::{merge, MergeError};
