//! Walks through the three-legged flow against the sandbox.
//!
//! Prints the authorize URL, then exchanges the code pasted back from the redirect.
//!
//! ```sh
//! ORCID_CLIENT_ID=APP-XXXX ORCID_CLIENT_SECRET=... cargo run --example authorize
//! ```

// std
use std::{env, io};
// crates.io
use color_eyre::Result;
// self
use orcid_client::{
	ReqwestOrcidClient,
	config::{ClientConfig, Environment},
	oauth::{AuthorizeParams, Scope},
};

const REDIRECT_URI: &str = "https://developers.google.com/oauthplayground";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client_id = env::var("ORCID_CLIENT_ID")?;
	let client_secret = env::var("ORCID_CLIENT_SECRET")?;
	let client =
		ReqwestOrcidClient::new(ClientConfig::default().with_environment(Environment::sandbox()));
	let params = AuthorizeParams::new(&client_id, REDIRECT_URI, [Scope::Authenticate])
		.with_generated_state()
		.with_show_login(true);

	println!("Open this URL and sign in:\n{}", client.authorize_url(&params)?);
	println!("Paste the `code` query parameter from the redirect:");

	let mut code = String::new();

	io::stdin().read_line(&mut code)?;

	let token =
		client.exchange_code(&client_id, &client_secret, code.trim(), REDIRECT_URI).await?;

	println!(
		"Authorized {} ({}), scopes: {:?}, expires in {:?}.",
		token.name.as_deref().unwrap_or("<unknown>"),
		token.orcid.as_deref().unwrap_or("<unknown>"),
		token.scopes().collect::<Vec<_>>(),
		token.expires_in_duration()
	);

	Ok(())
}
