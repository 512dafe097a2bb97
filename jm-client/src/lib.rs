//! # jm-client
//!
//! Comic-archive lookup client: default options with the nested proxy path the
//! archive client exposes, and a reqwest-backed search API behind the
//! [`JmClient`] trait so callers can swap in fakes.

mod client;
mod errors;
mod options;
mod types;

pub use client::{build_client, JmApiClient, JmClient};
pub use errors::{Error, Result};
pub use options::{ClientOptions, JmOptions, ProxyOptions, DEFAULT_API_BASE};
pub use types::{Album, SearchPage};
