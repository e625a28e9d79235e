use tracing::warn;

/// Weights used for any outcome or result weight a formula leaves out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightDefaults {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
    pub result: f64,
}

impl Default for WeightDefaults {
    fn default() -> Self {
        Self {
            win: 0.0,
            draw: 0.0,
            loss: 0.0,
            result: 0.0,
        }
    }
}

/// Configuration for the leaderboard engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub weight_defaults: WeightDefaults,
}

impl EngineConfig {
    /// Reads defaults from the environment, falling back to built-in values
    pub fn new() -> Self {
        let builtin = WeightDefaults::default();
        Self {
            weight_defaults: WeightDefaults {
                win: env_weight("LEADERBOARD_DEFAULT_WIN_WEIGHT", builtin.win),
                draw: env_weight("LEADERBOARD_DEFAULT_DRAW_WEIGHT", builtin.draw),
                loss: env_weight("LEADERBOARD_DEFAULT_LOSS_WEIGHT", builtin.loss),
                result: env_weight("LEADERBOARD_DEFAULT_RESULT_WEIGHT", builtin.result),
            },
        }
    }

    pub fn with_weight_defaults(mut self, weight_defaults: WeightDefaults) -> Self {
        self.weight_defaults = weight_defaults;
        self
    }
}

fn env_weight(key: &str, fallback: f64) -> f64 {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                warn!(key, raw = %raw, "Ignoring invalid weight default");
                fallback
            }
        },
        Err(_) => fallback,
    }
}
