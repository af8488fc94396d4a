//! Line-oriented terminal client for the desert encounter game.
//!
//! The binary wires three pieces together:
//! - [`config`] turns environment variables into runtime and content settings
//! - [`input`] reads commands from stdin and feeds them to the runtime as
//!   intents
//! - [`render`] prints each render snapshot as text or JSON
//!
//! All game logic stays in the runtime; the client only talks to it through
//! [`runtime::IntentProvider`] and [`runtime::RuntimeHandle`].

pub mod config;
pub mod input;
pub mod render;

pub use config::ClientConfig;
pub use input::{InputError, StdinIntentProvider};
pub use render::OutputFormat;
