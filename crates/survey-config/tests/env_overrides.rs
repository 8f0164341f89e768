use figment::Jail;
use survey_config::SurveyConfig;

#[test]
fn env_sets_nested_database_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("SURVEY_DATABASE__URL", "libsql://surveys-acme.turso.io");
        jail.set_env("SURVEY_DATABASE__AUTH_TOKEN", "token-from-env");

        let config = SurveyConfig::load().expect("config loads");
        assert_eq!(config.database.url, "libsql://surveys-acme.turso.io");
        assert_eq!(config.database.auth_token, "token-from-env");
        assert!(config.database.is_remote());
        Ok(())
    });
}

#[test]
fn env_sets_server_bind() {
    Jail::expect_with(|jail| {
        jail.set_env("SURVEY_SERVER__BIND", "0.0.0.0:8080");

        let config = SurveyConfig::load().expect("config loads");
        assert_eq!(config.server.socket_addr().unwrap().port(), 8080);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".survey")?;
        jail.create_file(
            ".survey/config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("SURVEY_DATABASE__PATH", "from-env.db");

        let config = SurveyConfig::load().expect("config loads");
        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}
