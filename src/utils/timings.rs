/// Timer settings for the share widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetTimings {
    /// How often the address is re-read in case no navigation event fired
    pub poll_interval_ms: u32,
    /// How long the "copied" toast stays up after the last copy
    pub toast_duration_ms: u32,
}

impl Default for WidgetTimings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            toast_duration_ms: 2000,
        }
    }
}
