//! Configuration for the reading engine.

/// Default key-value namespace.
pub const DEFAULT_NAMESPACE: &str = "dreamfortune";

/// Default number of diary entries kept.
pub const DEFAULT_DIARY_CAPACITY: usize = 20;

/// Default link appended to share texts.
pub const DEFAULT_SHARE_URL: &str = "https://dopabrain.com/dream-fortune/";

/// Configuration for an application instance.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Prefix for every persisted key.
    pub namespace: String,
    /// Maximum number of diary entries kept (at least 1).
    pub diary_capacity: usize,
    /// Link appended to share texts.
    pub share_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            diary_capacity: DEFAULT_DIARY_CAPACITY,
            share_url: DEFAULT_SHARE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Set the storage namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the diary capacity (clamped to at least 1).
    pub fn with_diary_capacity(mut self, capacity: usize) -> Self {
        self.diary_capacity = capacity.max(1);
        self
    }

    /// Set the share link.
    pub fn with_share_url(mut self, url: impl Into<String>) -> Self {
        self.share_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.namespace, "dreamfortune");
        assert_eq!(cfg.diary_capacity, 20);
        assert!(cfg.share_url.starts_with("https://"));
    }

    #[test]
    fn builder_methods() {
        let cfg = AppConfig::default()
            .with_namespace("test")
            .with_diary_capacity(5)
            .with_share_url("https://example.com/");
        assert_eq!(cfg.namespace, "test");
        assert_eq!(cfg.diary_capacity, 5);
        assert_eq!(cfg.share_url, "https://example.com/");
    }

    #[test]
    fn capacity_clamped() {
        let cfg = AppConfig::default().with_diary_capacity(0);
        assert_eq!(cfg.diary_capacity, 1);
    }
}
