use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Token prefixes for credentials this service handles (Google OAuth access
/// tokens, Google API keys, JWTs).
const PREFIX_PATTERNS: [&str; 3] = ["ya29.", "AIza", "eyJ"];

/// Markers whose following token is a secret.
const MARKER_PATTERNS: [&str; 8] = [
    "Authorization: Bearer ",
    "authorization: bearer ",
    "Bearer ",
    "access_token=",
    "key=",
    "\"access_token\":\"",
    "\"token\":\"",
    "\"client_secret\":\"",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|(_, c)| !is_secret_char(*c))
        .map_or(input.len(), |(i, _)| from + i)
}

/// Replace the token after every occurrence of `marker`. A prefix pattern is
/// redacted together with its marker; a key marker keeps its label.
fn redact_after(scrubbed: &mut String, marker: &str, keep_marker: bool) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let content_start = start + marker.len();
        let end = token_end(scrubbed, content_start);

        if end == content_start {
            search_from = content_start;
            continue;
        }

        let replace_from = if keep_marker { content_start } else { start };
        scrubbed.replace_range(replace_from..end, REDACTED);
        search_from = replace_from + REDACTED.len();
    }
}

/// Scrub credential-shaped tokens from vendor error text.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let needs_scrubbing = PREFIX_PATTERNS
        .iter()
        .chain(MARKER_PATTERNS.iter())
        .any(|pattern| input.contains(pattern));
    if !needs_scrubbing {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in MARKER_PATTERNS {
        redact_after(&mut scrubbed, marker, true);
    }
    for prefix in PREFIX_PATTERNS {
        redact_after(&mut scrubbed, prefix, false);
    }
    Cow::Owned(scrubbed)
}

/// Sanitize API error text by scrubbing secrets and truncating length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    if scrubbed.chars().count() <= MAX_API_ERROR_CHARS {
        return scrubbed.into_owned();
    }

    let truncated: String = scrubbed.chars().take(MAX_API_ERROR_CHARS).collect();
    format!("{truncated}...")
}

/// Build a sanitized collaborator error from a failed HTTP response.
pub async fn api_error(vendor: &str, response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());
    let sanitized = sanitize_api_error(&body);
    anyhow::anyhow!("{vendor} API error ({status}): {sanitized}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        let input = "model overloaded, try again";
        assert!(matches!(scrub_secret_patterns(input), Cow::Borrowed(_)));
    }

    #[test]
    fn scrubs_google_access_tokens() {
        let input = "token ya29.a0AfH6SMBx-secret rejected";
        let scrubbed = scrub_secret_patterns(input);
        assert!(!scrubbed.contains("a0AfH6SMBx-secret"));
        assert_eq!(scrubbed, "token [REDACTED] rejected");
    }

    #[test]
    fn scrubs_bearer_header_but_keeps_label() {
        let input = "sent Authorization: Bearer abc.def-123 upstream";
        let scrubbed = scrub_secret_patterns(input);
        assert!(!scrubbed.contains("abc.def-123"));
        assert!(scrubbed.contains("Authorization: Bearer [REDACTED]"));
    }

    #[test]
    fn scrubs_json_and_query_tokens() {
        let input = r#"{"access_token":"s3cr3t"} url?key=AIzaSyExample"#;
        let scrubbed = scrub_secret_patterns(input);
        assert!(!scrubbed.contains("s3cr3t"));
        assert!(!scrubbed.contains("SyExample"));
    }

    #[test]
    fn sanitize_truncates_long_bodies_on_char_boundary() {
        let input = "炎".repeat(500);
        let sanitized = sanitize_api_error(&input);
        assert!(sanitized.ends_with("..."));
        assert_eq!(sanitized.chars().count(), MAX_API_ERROR_CHARS + 3);
    }
}
