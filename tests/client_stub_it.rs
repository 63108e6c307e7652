#![cfg(feature = "test")]

// self
use orcid_client::{
	OrcidClient,
	_preludet::*,
	config::{ClientConfig, Environment},
	http::{StubReply, StubTransport},
	id::OrcidId,
	oauth::{AuthorizeParams, Scope},
};

const RECORD: &str = include_str!("fixtures/record.json");
const WORKS: &str = include_str!("fixtures/works.json");
const TOKEN: &str = r#"{
	"access_token": "f5af9f51-07e6-4332-8f1a-c0c11c1e3728",
	"token_type": "bearer",
	"refresh_token": "f725f747-3a65-49f6-a231-3e8944ce464d",
	"expires_in": 631138518,
	"scope": "/authenticate",
	"name": "Sofia Garcia",
	"orcid": "0000-0001-2345-6789"
}"#;

fn carberry() -> OrcidId {
	OrcidId::new("0000-0002-1825-0097").expect("Fixture iD should be valid.")
}

#[tokio::test]
async fn fetch_record_sends_versioned_accept_and_decodes_fixture() {
	let (client, transport) = build_stub_client([StubReply::json(200, RECORD)]);
	let record = client.fetch_record(&carberry()).await.expect("Record fixture should decode.");

	assert_eq!(record.orcid_path(), Some("0000-0002-1825-0097"));
	assert_eq!(record.given_names(), Some("Test"));
	assert_eq!(record.family_name(), Some("Carberry"));

	let request = transport.last_request().expect("Request should be recorded.");

	assert_eq!(request.method, "GET");
	assert_eq!(request.uri, "https://pub.orcid.org/v3.0/0000-0002-1825-0097/record");
	assert_eq!(request.header("accept"), Some("application/vnd.orcid+json"));
	assert_eq!(request.header("user-agent"), Some(TEST_USER_AGENT));
	assert!(request.header("content-type").is_none());
	assert!(request.body.is_empty());
}

#[tokio::test]
async fn fetch_works_targets_the_works_resource() {
	let (client, transport) = build_stub_client([StubReply::json(200, WORKS)]);
	let works = client.fetch_works(&carberry()).await.expect("Works fixture should decode.");
	let summaries = works.summaries().collect::<Vec<_>>();

	assert_eq!(summaries.len(), 1);
	assert_eq!(summaries[0].put_code, Some(1_045_646));
	assert_eq!(summaries[0].title_text(), Some("Example Work"));
	assert_eq!(
		transport.last_request().expect("Request should be recorded.").uri,
		"https://pub.orcid.org/v3.0/0000-0002-1825-0097/works"
	);
}

#[tokio::test]
async fn sandbox_environment_changes_only_the_host() {
	let transport = StubTransport::with_replies([StubReply::json(200, "{}")]);
	let client = OrcidClient::with_transport(
		ClientConfig::default().with_environment(Environment::sandbox()),
		transport.clone(),
	);

	client.fetch_works(&carberry()).await.expect("Empty works should decode.");

	let request = transport.last_request().expect("Request should be recorded.");

	assert_eq!(request.uri, "https://pub.sandbox.orcid.org/v3.0/0000-0002-1825-0097/works");
	assert!(request.header("user-agent").is_some_and(|agent| agent.starts_with("orcid-client/")));
}

#[tokio::test]
async fn not_found_surfaces_as_http_error() {
	let (client, _) = build_stub_client([StubReply::json(404, r#"{"error":"not found"}"#)]);
	let id = OrcidId::new("0000-0000-0000-0000").expect("Zero iD is well formed.");
	let err = client.fetch_record(&id).await.expect_err("404 must fail.");

	assert!(err.is_not_found());
	assert!(
		matches!(err, Error::Http { status: 404, body: Some(ref body) } if body.contains("not found"))
	);
}

#[tokio::test]
async fn non_utf8_error_body_is_dropped() {
	let (client, _) = build_stub_client([StubReply::status(500).with_body(vec![0xC3, 0x28])]);
	let err = client.fetch_works(&carberry()).await.expect_err("500 must fail.");

	assert!(matches!(err, Error::Http { status: 500, body: None }));
	assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn malformed_body_is_a_decoding_error() {
	let (client, _) = build_stub_client([
		StubReply::status(200).with_body("<html>maintenance</html>"),
		StubReply::json(200, r#"{"group":[{"work-summary":[{"put-code":"abc"}]}]}"#),
	]);
	let err = client.fetch_record(&carberry()).await.expect_err("HTML is not a record.");

	assert!(matches!(err, Error::Decoding { .. }));

	let err = client.fetch_works(&carberry()).await.expect_err("put-code must be numeric.");

	assert!(err.to_string().contains("group[0].work-summary[0].put-code"));
}

#[tokio::test]
async fn trailing_garbage_after_json_is_a_decoding_error() {
	let (client, _) = build_stub_client([
		StubReply::json(200, "{} <html>maintenance</html>"),
		StubReply::json(200, r#"{"group":[]}{"group":null}"#),
	]);
	let err = client.fetch_record(&carberry()).await.expect_err("Trailing HTML must fail.");

	assert!(matches!(err, Error::Decoding { .. }));

	let err = client.fetch_works(&carberry()).await.expect_err("Two documents must fail.");

	assert!(matches!(err, Error::Decoding { .. }));
	assert_eq!(err.kind().as_str(), "decoding");
}

#[tokio::test]
async fn empty_object_decodes_to_absent_fields() {
	let (client, _) = build_stub_client([StubReply::json(200, "{}")]);
	let record = client.fetch_record(&carberry()).await.expect("Empty record should decode.");

	assert!(record.person.is_none());
	assert!(record.given_names().is_none());
}

#[tokio::test]
async fn transport_failures_are_not_retried() {
	let (client, transport) = build_stub_client([
		StubReply::failure("connection refused"),
		StubReply::json(200, RECORD),
	]);
	let err = client.fetch_record(&carberry()).await.expect_err("Scripted failure must surface.");

	assert!(matches!(err, Error::Transport { ref message, .. } if message.contains("connection refused")));
	assert_eq!(transport.requests().len(), 1);
	assert_eq!(transport.pending(), 1);
}

#[tokio::test]
async fn exhausted_stub_and_non_http_status_are_transport_errors() {
	let (client, _) = build_stub_client([StubReply::status(600)]);

	assert!(matches!(
		client.fetch_record(&carberry()).await,
		Err(Error::Transport { ref message, .. }) if message == "non-HTTP response"
	));
	assert!(matches!(client.fetch_record(&carberry()).await, Err(Error::Transport { .. })));
}

#[tokio::test]
async fn exchange_code_posts_sorted_form_and_decodes_token() {
	let (client, transport) = build_stub_client([StubReply::json(200, TOKEN)]);
	let token = client
		.exchange_code("APP-1", "s3cr3t value", "Q1w2E3", "myapp://callback")
		.await
		.expect("Token fixture should decode.");

	assert_eq!(token.access_token.expose(), "f5af9f51-07e6-4332-8f1a-c0c11c1e3728");
	assert_eq!(token.orcid.as_deref(), Some("0000-0001-2345-6789"));
	assert_eq!(token.expires_in_duration(), Some(Duration::seconds(631_138_518)));
	assert_eq!(token.scopes().collect::<Vec<_>>(), ["/authenticate"]);

	let request = transport.last_request().expect("Request should be recorded.");

	assert_eq!(request.method, "POST");
	assert_eq!(request.uri, "https://orcid.org/oauth/token");
	assert_eq!(request.header("accept"), Some("application/json"));
	assert_eq!(request.header("content-type"), Some("application/x-www-form-urlencoded"));
	assert_eq!(request.header("user-agent"), Some(TEST_USER_AGENT));
	assert_eq!(
		request.body_text(),
		Some(
			"client_id=APP-1&client_secret=s3cr3t+value&code=Q1w2E3&grant_type=authorization_code&redirect_uri=myapp%3A%2F%2Fcallback"
		)
	);
}

#[tokio::test]
async fn rejected_code_keeps_upstream_error_body() {
	let (client, _) = build_stub_client([StubReply::json(
		400,
		r#"{"error":"invalid_grant","error_description":"Invalid authorization code"}"#,
	)]);
	let err = client
		.exchange_code("APP-1", "secret", "stale", "myapp://callback")
		.await
		.expect_err("400 must fail.");

	assert!(
		matches!(err, Error::Http { status: 400, body: Some(ref body) } if body.contains("invalid_grant"))
	);
}

#[tokio::test]
async fn token_without_access_token_fails_to_decode() {
	let (client, _) = build_stub_client([StubReply::json(200, r#"{"token_type":"bearer"}"#)]);
	let err = client
		.exchange_code("APP-1", "secret", "code", "myapp://callback")
		.await
		.expect_err("access_token is required.");

	assert!(matches!(err, Error::Decoding { .. }));
}

#[test]
fn authorize_url_uses_the_client_environment() {
	let (client, transport) = build_stub_client([]);
	let url = client
		.authorize_url(
			&AuthorizeParams::new("client", "myapp://callback", [Scope::Authenticate, Scope::ReadLimited])
				.with_state("state")
				.with_show_login(true)
				.with_prompt("login"),
		)
		.expect("Authorize URL should build.");

	assert_eq!(
		url.as_str(),
		"https://orcid.org/oauth/authorize?client_id=client&response_type=code&scope=%2Fauthenticate+%2Fread-limited&redirect_uri=myapp%3A%2F%2Fcallback&state=state&show_login=true&prompt=login"
	);
	assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn concurrent_operations_share_one_client() {
	let (client, transport) =
		build_stub_client([StubReply::json(200, "{}"), StubReply::json(200, "{}")]);
	let other = client.clone();
	let id = carberry();
	let (record, works) = tokio::join!(client.fetch_record(&id), other.fetch_works(&id));

	record.expect("Record should decode.");
	works.expect("Works should decode.");

	assert_eq!(transport.requests().len(), 2);
}
