mod scroll;
mod threshold;
mod time;

pub use scroll::{ScrollDepthTracker, ScrollMetrics, SCROLL_DEPTH_MARKERS};
pub use threshold::ThresholdTracker;
pub use time::{
    Clock, ManualClock, SystemClock, TimeOnPageTracker, TIME_ON_PAGE_MARKERS, TIME_POLL_INTERVAL,
};
