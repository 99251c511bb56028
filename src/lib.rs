#![warn(clippy::pedantic)]
// Noisy doc/signature lints on the builder surface
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
// Style preference: format!("{}", x) over format!("{x}")
#![allow(clippy::uninlined_format_args)]
// message::MessageContact and friends mirror the wire names
#![allow(clippy::module_name_repetitions)]

//! Client SDK for RCS Business Messaging chatbots behind a MaaP gateway.
//!
//! Three pieces make up a bot:
//! - [`EventDispatcher`] routes webhook bodies to per-kind handlers.
//! - [`message`] builds outbound content: text, rich cards, carousels,
//!   files, audio, geolocation, and suggestion chips.
//! - [`GatewayClient`] posts those messages to `{apiUrl}/{botId}/messages`.
//!
//! [`webhook`] and [`config`] wire the three into a runnable server.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod gateway;
pub mod message;
pub mod webhook;

pub use dispatch::{EventDispatcher, EventHandler};
pub use errors::{BuildError, DispatchError, SendError};
pub use events::{EventKind, InboundEvent};
pub use gateway::GatewayClient;
pub use message::{MessageContact, MessageContent, OutboundMessage, Suggestions};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOGO: &str = "💬";
