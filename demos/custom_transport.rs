//! Demonstrates plugging a non-reqwest transport into [`OrcidClient`].
//!
//! 1. Implement [`HttpTransport`] with your own error type.
//! 2. Return canned responses, or wrap the error in [`HttpClientError`].
//! 3. Hand the transport to [`OrcidClient::with_transport`]; every failure it reports surfaces
//!    as [`Error::Transport`].

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
};
// crates.io
use color_eyre::Result;
// self
use orcid_client::{
	OrcidClient,
	config::ClientConfig,
	error::Error,
	http::{
		HttpClientError, HttpRequest, HttpResponse, HttpTransport, TransportFuture,
		http::StatusCode,
	},
	id::OrcidId,
};

const RECORD: &[u8] = br#"{
	"orcid-identifier": { "path": "0000-0002-1825-0097" },
	"person": { "name": { "given-names": { "value": "Josiah" }, "family-name": { "value": "Carberry" } } }
}"#;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let id = OrcidId::new("https://orcid.org/0000-0002-1825-0097")?;
	let client = OrcidClient::with_transport(ClientConfig::default(), MockTransport::Record);
	let record = client.fetch_record(&id).await?;

	println!(
		"Record served by the mock transport: {} {}.",
		record.given_names().unwrap_or("?"),
		record.family_name().unwrap_or("?")
	);

	let missing = OrcidClient::with_transport(ClientConfig::default(), MockTransport::Missing);

	match missing.fetch_works(&id).await {
		Err(e) if e.is_not_found() => println!("Mock transport answered 404: {e}."),
		other => println!("Unexpected outcome: {other:?}."),
	}

	let offline = OrcidClient::with_transport(
		ClientConfig::default(),
		MockTransport::Offline(MockTransportError::DnsFailure { host: "pub.orcid.org" }),
	);

	match offline.fetch_record(&id).await {
		Err(Error::Transport { message, .. }) => println!("Transport failure mapped: {message}."),
		other => println!("Unexpected outcome: {other:?}."),
	}

	Ok(())
}

#[derive(Clone, Debug)]
enum MockTransportError {
	DnsFailure { host: &'static str },
}
impl Display for MockTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::DnsFailure { host } => write!(f, "DNS lookup failed for {host}"),
		}
	}
}
impl StdError for MockTransportError {}

#[derive(Clone, Debug)]
enum MockTransport {
	Record,
	Missing,
	Offline(MockTransportError),
}
impl HttpTransport for MockTransport {
	type TransportError = MockTransportError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		println!("{} {}", request.method(), request.uri());

		Box::pin(async move {
			match self {
				Self::Record => Ok(HttpResponse::new(RECORD.to_vec())),
				Self::Missing => {
					let mut response = HttpResponse::new(br#"{"error":"not found"}"#.to_vec());

					*response.status_mut() = StatusCode::NOT_FOUND;

					Ok(response)
				},
				// The oauth2 crate keeps the `Reqwest` variant name even though the boxed
				// payload can be any transport error.
				Self::Offline(error) => Err(HttpClientError::Reqwest(Box::new(error.clone()))),
			}
		})
	}
}
