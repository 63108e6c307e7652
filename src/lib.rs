//! Typed async client for the public ORCID API, with helpers for the three-legged
//! OAuth authorization-code flow.
//!
//! ```no_run
//! use orcid_client::{ReqwestOrcidClient, config::ClientConfig, id::OrcidId};
//!
//! # async fn run() -> orcid_client::error::Result<()> {
//! let client = ReqwestOrcidClient::new(ClientConfig::default().with_user_agent("my-app/1.0"));
//! let id = OrcidId::new("https://orcid.org/0000-0002-1825-0097")?;
//! let record = client.fetch_record(&id).await?;
//!
//! println!("{:?}", record.given_names());
//! # Ok(())
//! # }
//! ```
//!
//! Every request goes through an [`http::HttpTransport`]. The default is reqwest-backed;
//! [`http::StubTransport`] replays canned responses so whole pipelines can be tested
//! without a network.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod id;
pub mod model;
pub mod oauth;
pub mod obs;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;
	use crate::{
		client::OrcidClient,
		config::{ClientConfig, Environment},
		http::{StubReply, StubTransport},
	};

	/// User agent pinned by test clients.
	pub const TEST_USER_AGENT: &str = "orcid-client-tests/1.0";

	/// Client type alias used by reqwest-backed integration tests.
	#[cfg(feature = "reqwest")]
	pub type ReqwestTestClient = OrcidClient<ReqwestTransport>;

	/// Builds a client over a [`StubTransport`] preloaded with `replies`.
	///
	/// The returned transport shares its queue and request log with the client.
	pub fn build_stub_client(
		replies: impl IntoIterator<Item = StubReply>,
	) -> (OrcidClient<StubTransport>, StubTransport) {
		let transport = StubTransport::with_replies(replies);
		let client = OrcidClient::with_transport(
			ClientConfig::default().with_user_agent(TEST_USER_AGENT),
			transport.clone(),
		);

		(client, transport)
	}

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	#[cfg(feature = "reqwest")]
	pub fn test_reqwest_transport() -> ReqwestTransport {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	/// Constructs a reqwest-backed client whose API and OAuth bases both point at
	/// `base_url` (typically an `httpmock` server).
	#[cfg(feature = "reqwest")]
	pub fn build_reqwest_test_client(base_url: &str) -> ReqwestTestClient {
		let api = Url::parse(&format!("{base_url}/v3.0/")).expect("Mock API base should parse.");
		let oauth = Url::parse(base_url).expect("Mock OAuth base should parse.");
		let config = ClientConfig::default()
			.with_environment(Environment::custom(api, oauth))
			.with_user_agent(TEST_USER_AGENT);

		OrcidClient::with_transport(config, test_reqwest_transport())
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use client::ReqwestOrcidClient;
pub use client::OrcidClient;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
