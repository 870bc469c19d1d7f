use crate::config::Settings;

/// Load settings, falling back to defaults on any problem.
///
/// The config is optional, so failures never stop startup. The returned
/// notice is shown in the status line once the TUI is up, since anything
/// printed now disappears behind the alternate screen.
pub fn load_settings() -> (Settings, Option<String>) {
    match Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
