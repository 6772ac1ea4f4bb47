use shared::RouletteConfig;
use web_sys::window;

/// localStorage key holding an optional JSON override of the roulette tunables.
pub const ROULETTE_CONFIG_KEY: &str = "roulette_config";

pub fn load_roulette_config() -> RouletteConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(ROULETTE_CONFIG_KEY).ok().flatten());

    match stored {
        Some(raw) => parse_roulette_config(&raw),
        None => RouletteConfig::default(),
    }
}

pub fn parse_roulette_config(raw: &str) -> RouletteConfig {
    let parsed = match serde_json::from_str::<RouletteConfig>(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring unreadable {}: {}", ROULETTE_CONFIG_KEY, e);
            return RouletteConfig::default();
        }
    };

    match parsed.validated() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring {}: {}", ROULETTE_CONFIG_KEY, e);
            RouletteConfig::default()
        }
    }
}
