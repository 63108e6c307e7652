//! Fetches a public record and its works list from the production API.
//!
//! ```sh
//! cargo run --example fetch_record -- 0000-0002-1825-0097
//! ```

// crates.io
use color_eyre::Result;
// self
use orcid_client::{ReqwestOrcidClient, config::ClientConfig, id::OrcidId};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let raw = std::env::args().nth(1).unwrap_or_else(|| "0000-0002-1825-0097".into());
	let id = OrcidId::new(&raw)?;
	let client = ReqwestOrcidClient::new(ClientConfig::default());
	let record = client.fetch_record(&id).await?;

	println!(
		"{id}: {} {}",
		record.given_names().unwrap_or("<hidden>"),
		record.family_name().unwrap_or("<hidden>")
	);

	let works = client.fetch_works(&id).await?;

	for summary in works.summaries() {
		println!(
			"- [{}] {}",
			summary.put_code.map(|code| code.to_string()).unwrap_or_default(),
			summary.title_text().unwrap_or("<untitled>")
		);
	}

	Ok(())
}
