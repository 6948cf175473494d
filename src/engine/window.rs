use chrono::{NaiveTime, Timelike};

use crate::models::schedule::{AttendanceWindow, CheckInTiming, ShiftWindow};

const SECONDS_PER_DAY: i64 = 86_400;

/// Derives the allowed check-in/check-out windows from a shift and its
/// tolerance minutes. Overnight shifts (`shift_end < shift_start`) are
/// rolled to the next day before the early-departure tolerance is
/// subtracted; `check_out_from_next_day` reports when that rolled time
/// still lands past midnight.
pub fn compute_window(shift: &ShiftWindow) -> AttendanceWindow {
    let start = seconds_of_day(shift.shift_start);
    let mut end = seconds_of_day(shift.shift_end);
    if end < start {
        end += SECONDS_PER_DAY;
    }

    let late_tolerance = i64::from(shift.late_tolerance_minutes) * 60;
    let early_tolerance = i64::from(shift.early_departure_tolerance_minutes) * 60;

    let check_out_from = end - early_tolerance;

    AttendanceWindow {
        check_in_from: time_of_day(start - late_tolerance),
        check_in_until: time_of_day(start + late_tolerance),
        check_out_from: time_of_day(check_out_from),
        check_out_from_next_day: check_out_from >= SECONDS_PER_DAY,
    }
}

/// Buckets an actual check-in time against the shift's tolerance
/// window. The comparison works on the signed offset from shift start,
/// normalized to (-12h, +12h], so a check-in a few minutes before a
/// midnight shift is early rather than a day late.
pub fn classify_check_in(at: NaiveTime, shift: &ShiftWindow) -> CheckInTiming {
    let mut offset = seconds_of_day(at) - seconds_of_day(shift.shift_start);
    if offset <= -SECONDS_PER_DAY / 2 {
        offset += SECONDS_PER_DAY;
    } else if offset > SECONDS_PER_DAY / 2 {
        offset -= SECONDS_PER_DAY;
    }

    let late_tolerance = i64::from(shift.late_tolerance_minutes) * 60;

    if offset < -late_tolerance {
        CheckInTiming::Early
    } else if offset <= late_tolerance {
        CheckInTiming::OnTime
    } else {
        CheckInTiming::Late
    }
}

fn seconds_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight())
}

fn time_of_day(seconds: i64) -> NaiveTime {
    let wrapped = seconds.rem_euclid(SECONDS_PER_DAY) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(wrapped, 0)
        .expect("seconds already wrapped into a single day")
}
