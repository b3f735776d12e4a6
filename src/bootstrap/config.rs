use ac_core::ports::SettingsPort;
use ac_core::settings::Settings;
use tracing::warn;

/// Settings for startup. An unreadable or corrupt file is not fatal: the
/// daemon starts on defaults and leaves the file alone.
pub async fn load_settings(settings: &dyn SettingsPort) -> Settings {
    match settings.load().await {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = ?e, "failed to load settings, using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ac_infra::FileSettingsRepository;
    use tempfile::TempDir;

    #[tokio::test]
    async fn corrupt_settings_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").unwrap();
        let repo = FileSettingsRepository::new(&path);

        let settings = load_settings(&repo).await;

        assert_eq!(settings, Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json at all");
    }

    #[tokio::test]
    async fn stored_settings_are_used() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));
        let stored = Settings {
            slot_count: 6,
            ..Settings::default()
        };
        repo.save(&stored).await.unwrap();

        assert_eq!(load_settings(&repo).await, stored);
    }
}
