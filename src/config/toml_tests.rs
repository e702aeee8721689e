//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [lookup]
            interfaces = ["eth0", "wlan0"]

            [output]
            format = "json"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.lookup.interfaces, vec!["eth0", "wlan0"]);
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.lookup.interfaces.is_empty());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn parse_lookup_only() {
        let config = TomlConfig::parse("[lookup]\ninterfaces = [\"en0\"]\n").unwrap();

        assert_eq!(config.lookup.interfaces, vec!["en0"]);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [lookup]
            interfaces = ["eth0"]
            cache = true
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(TomlConfig::parse("[cache]\nttl = 5\n").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(TomlConfig::parse("[lookup]\ninterfaces = \"eth0\"\n").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.lookup.interfaces.is_empty());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn default_template_documents_every_section() {
        let template = default_config_template();

        assert!(template.contains("[lookup]"));
        assert!(template.contains("[output]"));
        assert!(template.contains("interfaces"));
        assert!(template.contains("format"));
    }
}
