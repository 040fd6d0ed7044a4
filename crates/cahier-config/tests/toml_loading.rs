//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use cahier_config::{CahierConfig, DEFAULT_BASE_URL};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://scolarite.example.ma/api"
timeout_secs = 15
user_agent = "cahier-test"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(CahierConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = CahierConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.api.base_url, "https://scolarite.example.ma/api");
        assert_eq!(config.api.timeout_secs, Some(15));
        assert_eq!(config.api.user_agent, "cahier-test");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[session]
path = "/var/lib/cahier/session.json"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(CahierConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = CahierConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.session.path, "/var/lib/cahier/session.json");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.general.default_page, 1);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cahier")?;
        jail.create_file(
            ".cahier/config.toml",
            r#"
[general]
default_format = "table"
default_page = 2
"#,
        )?;

        let config = CahierConfig::load().expect("config loads");
        assert_eq!(config.general.default_format, "table");
        assert_eq!(config.general.default_page, 2);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "ftp://files.example.ma"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(CahierConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = CahierConfig::from_figment(&figment).expect_err("should reject");
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}
