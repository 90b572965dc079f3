use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::SorteioError;

// ---------------------------------
// Civil calendar (fixed UTC-3, BRT)
// ---------------------------------
//
// All date reasoning uses epoch days: whole days since 1970-01-01 in the
// BRT civil frame. A single conversion algorithm is used everywhere;
// weekday and year/month/day are both derived from the epoch day.

/// Civil day (BRT) containing the given unix instant.
pub fn epoch_day_from_unix(ts: i64) -> i64 {
    (ts + UTC_OFFSET_SECS).div_euclid(SECS_PER_DAY)
}

/// Unix instant of 00:00:00 civil time on the given day.
pub fn civil_midnight_ts(epoch_day: i64) -> i64 {
    epoch_day * SECS_PER_DAY - UTC_OFFSET_SECS
}

/// Days-from-civil, Hinnant's algorithm.
pub fn epoch_day_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64 - (month <= 2) as i64;
    let m = month as i64;
    let d = day as i64;
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil-from-days, Hinnant's algorithm. Returns (year, month, day).
pub fn civil_from_epoch_day(epoch_day: i64) -> (i32, u8, u8) {
    let z = epoch_day + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    ((y + (m <= 2) as i64) as i32, m as u8, d as u8)
}

/// Weekday with Sunday = 0. 1970-01-01 was a Thursday.
pub fn weekday_sun0(epoch_day: i64) -> u8 {
    (epoch_day + 4).rem_euclid(7) as u8
}

// -----------------
// Draw-day rules
// -----------------

/// Closed days: Christmas and New Year's Day.
pub fn is_no_draw_day(epoch_day: i64) -> bool {
    let (_, m, d) = civil_from_epoch_day(epoch_day);
    matches!((m, d), (12, 25) | (1, 1))
}

/// Christmas Eve and New Year's Eve draw at 17:00 instead of 20:00.
pub fn is_early_draw_day(epoch_day: i64) -> bool {
    let (_, m, d) = civil_from_epoch_day(epoch_day);
    matches!((m, d), (12, 24) | (12, 31))
}

pub fn draw_hour(epoch_day: i64) -> u8 {
    if is_early_draw_day(epoch_day) {
        EARLY_DRAW_HOUR
    } else {
        STANDARD_DRAW_HOUR
    }
}

/// Draws happen every day except Sundays and closed days. Early-draw days
/// are valid, just earlier.
pub fn is_valid_draw_day(epoch_day: i64) -> bool {
    weekday_sun0(epoch_day) != 0 && !is_no_draw_day(epoch_day)
}

/// First valid draw day at or after `from_day`, scanning at most
/// [`MAX_SCHEDULE_SCAN_DAYS`]. Exhausting the scan is a broken-calendar
/// condition, never a normal outcome.
pub fn next_valid_draw_day(from_day: i64) -> Result<i64> {
    for off in 0..MAX_SCHEDULE_SCAN_DAYS {
        let day = from_day + off;
        if is_valid_draw_day(day) {
            return Ok(day);
        }
    }
    Err(error!(SorteioError::NoValidDrawDay))
}

// -----------------
// Schedule
// -----------------

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawSchedule {
    /// Civil draw date.
    pub epoch_day: i64,
    pub draw_hour: u8,
    /// Draw instant, unix seconds.
    pub draw_ts: i64,
    /// One second before the draw instant, same civil day.
    pub cutoff_ts: i64,
    /// 20:00:01 civil time on the previous day.
    pub reg_start_ts: i64,
}

/// Schedule for a specific civil date. Does not check validity; callers
/// pre-validate with [`is_valid_draw_day`].
pub fn build_schedule(epoch_day: i64) -> DrawSchedule {
    let hour = draw_hour(epoch_day);
    let draw_ts = civil_midnight_ts(epoch_day) + hour as i64 * SECS_PER_HOUR;
    DrawSchedule {
        epoch_day,
        draw_hour: hour,
        draw_ts,
        cutoff_ts: draw_ts - 1,
        reg_start_ts: civil_midnight_ts(epoch_day - 1) + REG_OPEN_SECOND_OF_DAY,
    }
}

/// The schedule registrations should currently target.
///
/// Today's draw stays the target until its own cutoff instant passes; the
/// window does not roll over at midnight. Past the cutoff (or on an invalid
/// day) the next valid day's schedule is returned.
pub fn current_schedule(now: i64) -> Result<DrawSchedule> {
    let today = epoch_day_from_unix(now);
    if is_valid_draw_day(today) {
        let sched = build_schedule(today);
        if now <= sched.cutoff_ts {
            return Ok(sched);
        }
    }
    let day = next_valid_draw_day(today + 1)?;
    Ok(build_schedule(day))
}

// -----------------
// Concurso numbering
// -----------------

/// Concurso number for `target_day`, walking day by day from the reference
/// pair. Valid draw days are counted in the half-open range that excludes
/// the reference day and includes the target day; the reference day's own
/// validity never matters. Forward and backward walks agree, so the mapping
/// from valid draw days to numbers is an order-preserving bijection.
pub fn concurso_for_day(ref_concurso: u32, ref_day: i64, target_day: i64) -> Result<u32> {
    let mut count: u32 = 0;
    if target_day >= ref_day {
        let mut day = ref_day + 1;
        while day <= target_day {
            if is_valid_draw_day(day) {
                count = count.checked_add(1).ok_or(SorteioError::MathOverflow)?;
            }
            day += 1;
        }
        ref_concurso
            .checked_add(count)
            .ok_or(error!(SorteioError::MathOverflow))
    } else {
        let mut day = target_day;
        while day < ref_day {
            if is_valid_draw_day(day) {
                count = count.checked_add(1).ok_or(SorteioError::MathOverflow)?;
            }
            day += 1;
        }
        ref_concurso
            .checked_sub(count)
            .ok_or(error!(SorteioError::MathOverflow))
    }
}
