//! # signalwire-rest
//!
//! REST client for SignalWire spaces, speaking the `2010-04-01` API dialect.
//!
//! ## Overview
//!
//! A [`Client`] is built from an explicit [`ClientConfig`]. It resolves the
//! space host once, shares one authenticated HTTP transport between the API
//! and fax domains, and decodes every response through static per-resource
//! schemas. Nothing is installed globally: two clients configured for
//! different spaces never affect each other.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use signalwire_rest::{Client, ClientConfig, NumberSearch};
//!
//! #[tokio::main]
//! async fn main() -> signalwire_rest::Result<()> {
//!     let config = ClientConfig::new("project-id", "token").with_space_url("example.signalwire.com");
//!     let client = Client::new(config)?;
//!
//!     let search = NumberSearch::new().area_code(510).sms_enabled(true);
//!     let mut numbers = client.api().available_phone_numbers("US").local().stream(&search, Some(20), None);
//!     while let Some(number) = numbers.try_next().await? {
//!         println!("{}", number.text("phone_number").unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client facade, API and fax domains, list and context handles |
//! | [`config`] | Client configuration and environment bootstrap |
//! | [`endpoint`] | Space host resolution |
//! | [`resources`] | Resource kinds and decoded instances |
//! | [`schema`] | Schema-driven payload decoding |
//! | [`search`] | Query parameters for list requests |
//! | [`page`] | Pages and lazy multi-page traversal |
//! | [`rest_error`] | Rendering of non-2xx replies |
//! | [`transport`] | Authenticated HTTP transport |

pub mod client;
pub mod config;
pub mod endpoint;
pub mod page;
pub mod resources;
pub mod rest_error;
pub mod schema;
pub mod search;
pub mod transport;

pub use client::{ApiDomain, Client, FaxDomain, ResourceContext, ResourceList};
pub use config::ClientConfig;
pub use endpoint::SpaceUrl;
pub use page::{Page, PageLimits};
pub use resources::{Instance, ResourceKind, Solution};
pub use rest_error::{RestError, TerminalProbe};
pub use schema::FieldValue;
pub use search::{NumberSearch, PageOptions, QueryParams};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
