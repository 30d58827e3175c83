use crate::di::ConfigProvider;
use crate::package::manifest::EnvRequirement;

/// Decides which mods a server install skips and which cleanup keeps.
///
/// Patterns are case-insensitive substrings of the filename. The same filter
/// instance is consulted for manifest mods and override-tree mods, so a
/// client-only mod cannot slip in through either path.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    client_only: Vec<String>,
    preserved: Vec<String>,
}

impl ContentFilter {
    /// Empty patterns are dropped; they would match every filename.
    pub fn new(client_only: &[String], preserved: &[String]) -> Self {
        Self {
            client_only: normalize(client_only),
            preserved: normalize(preserved),
        }
    }

    pub fn from_config(config: &dyn ConfigProvider) -> Self {
        Self::new(config.client_only_mods(), config.preserved_mods())
    }

    /// True when the mod declares no server support or matches a client-only pattern
    pub fn is_client_only(&self, filename: &str, server: Option<EnvRequirement>) -> bool {
        if server == Some(EnvRequirement::Unsupported) {
            return true;
        }
        matches_any(filename, &self.client_only)
    }

    pub fn is_preserved(&self, filename: &str) -> bool {
        matches_any(filename, &self.preserved)
    }
}

fn normalize(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

fn matches_any(filename: &str, patterns: &[String]) -> bool {
    let filename = filename.to_lowercase();
    patterns.iter().any(|p| filename.contains(p.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ContentFilter {
        ContentFilter::new(
            &["Sodium".to_string(), "iris".to_string()],
            &["chunky".to_string()],
        )
    }

    #[test]
    fn test_client_only_by_env() {
        let filter = ContentFilter::default();
        assert!(filter.is_client_only("lithium.jar", Some(EnvRequirement::Unsupported)));
        assert!(!filter.is_client_only("lithium.jar", Some(EnvRequirement::Required)));
        assert!(!filter.is_client_only("lithium.jar", Some(EnvRequirement::Optional)));
        assert!(!filter.is_client_only("lithium.jar", None));
    }

    #[test]
    fn test_client_only_by_pattern_case_insensitive() {
        let filter = filter();
        assert!(filter.is_client_only("sodium-fabric-0.5.3.jar", None));
        assert!(filter.is_client_only("Iris-Shaders-1.6.jar", Some(EnvRequirement::Required)));
        assert!(!filter.is_client_only("lithium-0.11.jar", None));
    }

    #[test]
    fn test_preserved() {
        let filter = filter();
        assert!(filter.is_preserved("Chunky-1.3.92.jar"));
        assert!(!filter.is_preserved("sodium.jar"));
    }

    #[test]
    fn test_empty_patterns_ignored() {
        let filter = ContentFilter::new(&["".to_string(), "  ".to_string()], &["".to_string()]);
        assert!(!filter.is_client_only("anything.jar", None));
        assert!(!filter.is_preserved("anything.jar"));
    }

    #[test]
    fn test_from_config() {
        let mut config = crate::config::Config::new("pack", "/srv");
        config.client_only_mods = vec!["zoomify".to_string()];
        config.preserved_mods = vec!["spark".to_string()];

        let filter = ContentFilter::from_config(&config);
        assert!(filter.is_client_only("Zoomify-2.11.jar", None));
        assert!(filter.is_preserved("spark-1.10.jar"));
    }
}
