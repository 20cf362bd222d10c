use careerwatch_core::FetchConfig;
use rand::Rng;

/// Common desktop user agents used when rotation is enabled.
const DESKTOP_USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

/// Browser-like request headers sent by both the static fetcher and the
/// rendered session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestProfile {
    pub user_agent: String,
    pub accept: String,
}

impl RequestProfile {
    /// Fixed header set taken from the fetch configuration.
    pub fn fixed(config: &FetchConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            accept: config.accept.clone(),
        }
    }

    /// Same `Accept` header, random common desktop user agent.
    pub fn randomized(config: &FetchConfig) -> Self {
        let mut rng = rand::thread_rng();
        let ua_idx = rng.gen_range(0..DESKTOP_USER_AGENTS.len());

        Self {
            user_agent: DESKTOP_USER_AGENTS[ua_idx].to_string(),
            accept: config.accept.clone(),
        }
    }

    /// Profile for one request according to `randomize_user_agent`.
    pub fn for_config(config: &FetchConfig) -> Self {
        if config.randomize_user_agent {
            Self::randomized(config)
        } else {
            Self::fixed(config)
        }
    }
}

impl Default for RequestProfile {
    fn default() -> Self {
        Self::fixed(&FetchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_profile_uses_config() {
        let mut config = FetchConfig::default();
        config.user_agent = "careerwatch-test/1.0".to_string();

        let profile = RequestProfile::for_config(&config);
        assert_eq!(profile.user_agent, "careerwatch-test/1.0");
        assert_eq!(profile.accept, config.accept);
    }

    #[test]
    fn test_randomized_profile() {
        let config = FetchConfig {
            randomize_user_agent: true,
            ..FetchConfig::default()
        };

        let profile = RequestProfile::for_config(&config);
        assert!(DESKTOP_USER_AGENTS.contains(&profile.user_agent.as_str()));
        assert_eq!(profile.accept, config.accept);
    }

    #[test]
    fn test_randomized_variation() {
        let config = FetchConfig::default();

        // Probabilistic but very unlikely to fail
        let profiles: Vec<_> = (0..20).map(|_| RequestProfile::randomized(&config)).collect();

        let first_ua = &profiles[0].user_agent;
        let all_same = profiles.iter().all(|p| &p.user_agent == first_ua);
        assert!(!all_same, "Expected variation in user agents");
    }
}
