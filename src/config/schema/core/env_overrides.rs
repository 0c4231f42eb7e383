use super::Config;
use crate::config::TwitterConfig;

fn non_empty_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        std::env::var(key)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(backend) = non_empty_var(&["ENJO_BACKEND"]) {
            match backend.parse() {
                Ok(backend) => self.backend = backend,
                Err(error) => tracing::warn!(%error, "ignoring ENJO_BACKEND"),
            }
        }

        if let Some(host) = non_empty_var(&["ENJO_HOST"]) {
            self.gateway.host = host;
        }

        if let Some(port_str) = non_empty_var(&["ENJO_PORT", "PORT"])
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Some(project_id) = non_empty_var(&["GCP_PROJECT_ID"]) {
            self.vertex.project_id = Some(project_id);
        }

        if let Some(location) = non_empty_var(&["GCP_LOCATION"]) {
            self.vertex.location = location;
        }

        if let Some(token) = non_empty_var(&["GCP_ACCESS_TOKEN"]) {
            self.vertex.access_token = Some(token);
        }

        if let Some(model) = non_empty_var(&["ENJO_TEXT_MODEL"]) {
            self.text_model.model = model;
        }

        if let Some(model) = non_empty_var(&["ENJO_IMAGE_MODEL"]) {
            self.image_model.model = model;
        }

        if let Some(token) = non_empty_var(&["TWITTER_ACCESS_TOKEN"]) {
            match self.twitter.as_mut() {
                Some(twitter) => twitter.access_token = token,
                None => self.twitter = Some(TwitterConfig::new(token)),
            }
        }
    }
}
