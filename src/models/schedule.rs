use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Nominal shift boundaries plus the tolerance minutes configured per
/// work location. `shift_end` earlier than `shift_start` means the
/// shift runs overnight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub late_tolerance_minutes: u32,
    pub early_departure_tolerance_minutes: u32,
}

/// Allowed check-in/check-out times derived from a `ShiftWindow`.
/// Times are time-of-day only; `check_out_from_next_day` marks an
/// overnight shift whose check-out window opens on the following
/// calendar day. Date interpretation stays with the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttendanceWindow {
    pub check_in_from: NaiveTime,
    pub check_in_until: NaiveTime,
    pub check_out_from: NaiveTime,
    pub check_out_from_next_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInTiming {
    Early,
    OnTime,
    Late,
}

impl CheckInTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckInTiming::Early => "early",
            CheckInTiming::OnTime => "on_time",
            CheckInTiming::Late => "late",
        }
    }
}
