pub fn load_config() -> anyhow::Result<survey_config::SurveyConfig> {
    let config = survey_config::SurveyConfig::load_with_dotenv()?;
    if config.database.is_remote() {
        tracing::debug!(url = %config.database.url, "using remote database");
    } else {
        tracing::debug!(path = %config.database.path, "using local database");
    }
    Ok(config)
}
