//! Backend connection settings

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

/// Where the REST backend lives and how long a request may take
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Join the base URL and an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/items/"), "http://localhost:8000/items/");

        let trailing = ApiConfig { base_url: "http://inventory.lan/".into(), timeout_ms: 100 };
        assert_eq!(trailing.url("/spaces/3"), "http://inventory.lan/spaces/3");
    }
}
