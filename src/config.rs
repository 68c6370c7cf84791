use std::time::Duration;

/// Timing knobs for a controller.  Gameplay numbers (scores, thresholds,
/// starting time) are constants in `compute`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Length of one countdown second.
    pub tick_period: Duration,
    /// How long a kill stays on screen before the next enemy appears.
    pub resolve_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tick_period: Duration::from_secs(1),
            resolve_delay: Duration::from_millis(1500),
        }
    }
}
