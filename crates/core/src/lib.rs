//! Core library for glyphcraft
//!
//! This crate is the **Functional Core** of glyphcraft: every Unicode text
//! transformation lives here as a plain function over `&str`, with no I/O.
//! The `glyphcraft` binary is the Imperative Shell that reads input, parses
//! flags and prints results.
//!
//! # Module Organization
//!
//! - [`tables`]: Static character maps (mathematical alphabets, enclosed forms,
//!   lookalike scripts, symbol alphabets)
//! - [`substitute`]: Table-driven character substitution and fullwidth conversion
//! - [`zalgo`]: Combining-mark generation for "cursed" text
//! - [`encode`]: Binary, hex, Base64, Morse, Braille and block-letter encoders,
//!   plus decoders for the reversible ones
//! - [`settings`]: Option values and their coercions
//! - [`config`]: Per-tool control schemas and default resolution
//! - [`dispatch`]: The tool registry and the [`transform`] entry point
//!
//! # Randomness
//!
//! Tools that decorate or corrupt text draw from a caller-supplied
//! [`rand::RngCore`]. [`transform`] uses the thread-local generator;
//! [`transform_with_rng`] takes any generator, so a seeded `StdRng` makes the
//! output reproducible.
//!
//! # Example Usage
//!
//! ```rust
//! use glyphcraft_core::{transform, TransformOptions};
//!
//! let options = TransformOptions::new().with_setting("separator", "slash");
//! assert_eq!(transform("SOS", "morse-code", &options), "... --- ...");
//!
//! // Unknown tools leave the text alone.
//! assert_eq!(transform("hi", "no-such-tool", &TransformOptions::new()), "hi");
//! ```

pub mod config;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod settings;
pub mod substitute;
pub mod tables;
pub mod zalgo;

pub use dispatch::{find_tool, tools, transform, transform_with_rng, Category, Tool};
pub use error::EncodeError;
pub use settings::{SettingValue, TransformOptions};
