//! Deterministic `application/x-www-form-urlencoded` bodies.

// crates.io
use url::form_urlencoded::byte_serialize;

/// Encodes `pairs` as a form body with `key=value` entries sorted lexicographically.
///
/// ASCII letters, digits and `-._*` pass through, spaces become `+`, every other
/// byte is percent-encoded. Sorting makes the output independent of the input's
/// iteration order.
pub fn encode<I, K, V>(pairs: I) -> Vec<u8>
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let mut parts = pairs
		.into_iter()
		.map(|(key, value)| format!("{}={}", escape(key.as_ref()), escape(value.as_ref())))
		.collect::<Vec<_>>();

	parts.sort();

	parts.join("&").into_bytes()
}

fn escape(raw: &str) -> String {
	byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_prelude::*;

	#[test]
	fn output_is_sorted_and_uses_plus_for_spaces() {
		assert_eq!(encode([("b", "x y"), ("a", "1")]), b"a=1&b=x+y".to_vec());
		assert_eq!(encode([("a", "1"), ("b", "x y")]), b"a=1&b=x+y".to_vec());
	}

	#[test]
	fn hash_map_iteration_order_does_not_leak() {
		let pairs = HashMap::from([
			("redirect_uri", "myapp://callback"),
			("client_id", "APP-1"),
			("grant_type", "authorization_code"),
			("code", "Q1w2E3"),
			("client_secret", "s3cr3t"),
		]);
		let mut reversed = pairs.clone().into_iter().collect::<Vec<_>>();

		reversed.reverse();

		let first = encode(pairs);
		let second = encode(reversed);

		assert_eq!(first, second);
		assert_eq!(
			String::from_utf8(first).expect("Form bodies are ASCII."),
			"client_id=APP-1&client_secret=s3cr3t&code=Q1w2E3&grant_type=authorization_code&redirect_uri=myapp%3A%2F%2Fcallback"
		);
	}

	#[test]
	fn reserved_and_non_ascii_bytes_are_percent_encoded() {
		assert_eq!(encode([("k", "-._*~+&=/é")]), b"k=-._*%7E%2B%26%3D%2F%C3%A9".to_vec());
		assert_eq!(encode([("a b", "")]), b"a+b=".to_vec());
		assert!(encode(Vec::<(&str, &str)>::new()).is_empty());
	}
}
