use chrono::{Local, Timelike};

/// Wall-clock source for the hour check and the time displays.
pub trait Clock: Send + Sync {
    /// Local hour, `0..=23`.
    fn hour(&self) -> u32;

    /// `HH:MM:SS`.
    fn time_of_day(&self) -> String;

    /// `HH:MM:SS` followed by the zone.
    fn time_with_zone(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }

    fn time_of_day(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn time_with_zone(&self) -> String {
        Local::now().format("%H:%M:%S %Z").to_string()
    }
}

/// A clock stuck at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl FixedClock {
    pub fn at_hour(hour: u32) -> Self {
        Self {
            hour,
            minute: 0,
            second: 0,
        }
    }
}

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.hour
    }

    fn time_of_day(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    fn time_with_zone(&self) -> String {
        format!("{} UTC", self.time_of_day())
    }
}
