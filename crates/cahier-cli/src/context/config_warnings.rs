use cahier_config::CahierConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CahierConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CahierConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.base_url == cahier_config::DEFAULT_BASE_URL
        && has_single_underscore_key(&env_keys, "CAHIER_API_")
    {
        warnings.push(
            "API config appears default while CAHIER_API_* env vars exist. Use double underscores (example: CAHIER_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.session.path.is_empty() && has_single_underscore_key(&env_keys, "CAHIER_SESSION_") {
        warnings.push(
            "Session config appears default while CAHIER_SESSION_* env vars exist. Use double underscores (example: CAHIER_SESSION__PATH)."
                .to_string(),
        );
    }

    warnings
}

/// `CAHIER_API_BASE_URL` matches, `CAHIER_API__BASE_URL` does not.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with('_'))
}

#[cfg(test)]
mod tests {
    use super::collect_unconfigured_warnings;
    use cahier_config::CahierConfig;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_on_single_underscore_api_key() {
        let warnings =
            collect_unconfigured_warnings(&CahierConfig::default(), env(&["CAHIER_API_BASE_URL"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("CAHIER_API__BASE_URL"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &CahierConfig::default(),
            env(&["CAHIER_API__BASE_URL", "CAHIER_SESSION__PATH", "CAHIER_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_on_single_underscore_session_key() {
        let warnings =
            collect_unconfigured_warnings(&CahierConfig::default(), env(&["CAHIER_SESSION_PATH"]));
        assert_eq!(warnings.len(), 1);
    }
}
