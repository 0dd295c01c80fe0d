//! Normalization of repeatable `key=value` header arguments.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::FetchError;

/// One HTTP header as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Header<'a> {
    /// Splits on the first `=` only, values such as base64 tokens may contain more.
    pub fn parse(raw: &'a str) -> Self {
        let (key, value) = raw.split_once('=').unwrap_or((raw, ""));

        Self { key, value }
    }
}

/// Turns zero, one or many raw header arguments into headers, keeping their order.
pub fn parse_headers<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<Header<'a>> {
    raw.into_iter().map(Header::parse).collect()
}

/// Builds the request headers: `Content-Type: application/json`, then every header in order.
///
/// Duplicate keys are not merged, the last occurrence wins.
pub fn header_map(headers: &[Header<'_>]) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::new();
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for header in headers {
        let name = HeaderName::from_bytes(header.key.as_bytes())
            .map_err(|_| FetchError::InvalidHeader(header.key.to_owned()))?;

        let value = HeaderValue::from_str(header.value)
            .map_err(|_| FetchError::InvalidHeader(format!("{}={}", header.key, header.value)))?;

        map.insert(name, value);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_headers() {
        assert!(parse_headers(std::iter::empty()).is_empty());
    }

    #[test]
    fn single_header() {
        assert_eq!(parse_headers(["key=pass"]), vec![Header { key: "key", value: "pass" }]);
    }

    #[test]
    fn repeated_headers_are_kept() {
        let headers = parse_headers(["key=pass", "key=pass"]);

        assert_eq!(
            headers,
            vec![Header { key: "key", value: "pass" }, Header { key: "key", value: "pass" }]
        );
    }

    #[test]
    fn splits_on_the_first_equal_sign() {
        let headers = parse_headers(["token=123fadshfkj=$", "token=abc=def"]);

        assert_eq!(
            headers,
            vec![
                Header {
                    key: "token",
                    value: "123fadshfkj=$"
                },
                Header {
                    key: "token",
                    value: "abc=def"
                }
            ]
        );
    }

    #[test]
    fn header_without_value() {
        assert_eq!(Header::parse("X-Flag"), Header { key: "X-Flag", value: "" });
    }

    #[test]
    fn map_is_seeded_with_content_type() {
        let map = header_map(&[]).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn last_write_wins() {
        let headers = parse_headers(["key=first", "X-Api-Key=ABC123", "key=second", "content-type=application/graphql"]);
        let map = header_map(&headers).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map["key"], "second");
        assert_eq!(map["x-api-key"], "ABC123");
        assert_eq!(map[CONTENT_TYPE], "application/graphql");
    }

    #[test]
    fn invalid_header_name() {
        let error = header_map(&parse_headers(["bad header=value"])).unwrap_err();

        assert_eq!(error.to_string(), "invalid header 'bad header'");
    }
}
