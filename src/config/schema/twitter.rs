use serde::{Deserialize, Serialize};

/// X/Twitter API v2 credentials. Absent table means posting is disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// OAuth 2.0 user-context access token with `tweet.write` and `media.write`
    pub access_token: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_upload_base")]
    pub upload_base: String,
}

fn default_api_base() -> String {
    "https://api.x.com".into()
}

fn default_upload_base() -> String {
    "https://api.x.com".into()
}

impl TwitterConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_base: default_api_base(),
            upload_base: default_upload_base(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bases_default_to_public_api() {
        let parsed: TwitterConfig = toml::from_str(r#"access_token = "abc""#).unwrap();
        assert_eq!(parsed.access_token, "abc");
        assert_eq!(parsed.api_base, "https://api.x.com");
        assert_eq!(parsed.upload_base, "https://api.x.com");
    }
}
