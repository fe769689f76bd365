use std::time::Duration;

use crate::effects::HEADER_HEIGHT;
use crate::engage::TIME_POLL_INTERVAL;
use crate::popup::{ReshowPolicy, AUTO_SHOW_DELAY};

/// Page-level tuning knobs. The defaults are the shipped site behavior;
/// tests shorten the delays instead of waiting them out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Sticky-header height subtracted from smooth-scroll targets.
    pub header_height: i64,
    pub popup_auto_show_delay: Duration,
    pub reshow_policy: ReshowPolicy,
    /// Cadence the host is expected to call `on_tick` at.
    pub time_poll_interval: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT,
            popup_auto_show_delay: AUTO_SHOW_DELAY,
            reshow_policy: ReshowPolicy::default(),
            time_poll_interval: TIME_POLL_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_behavior() {
        let config = PageConfig::default();
        assert_eq!(config.header_height, 80);
        assert_eq!(config.popup_auto_show_delay, Duration::from_secs(2));
        assert_eq!(
            config.reshow_policy,
            ReshowPolicy::AfterDelay(Duration::from_secs(4))
        );
        assert_eq!(config.time_poll_interval, Duration::from_secs(5));
    }
}
