use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Count shown on startup unless `--initial` overrides it.
    #[serde(default)]
    pub initial: i64,
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll / redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture the mouse so the button can be clicked (default: true).
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,
    /// Header title (default: "Counter").
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse_capture() -> bool {
    true
}

fn default_title() -> String {
    "Counter".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse_capture: default_mouse_capture(),
            title: default_title(),
        }
    }
}
