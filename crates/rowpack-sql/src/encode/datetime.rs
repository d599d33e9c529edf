use super::digits::{write_digits, write_four_digits, write_two_digits};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Length of `yyyy-MM-dd HH:mm:ss.ffffff`.
pub const DATETIME_LEN: usize = 26;

/// Length of `yyyy-MM-dd`.
pub const DATE_LEN: usize = 10;

/// Length of `HH:mm:ss.ffffff`.
pub const TIME_LEN: usize = 15;

const DAYS_PER_YEAR: u32 = 365;
const DAYS_PER_4_YEARS: u32 = DAYS_PER_YEAR * 4 + 1; // 1461
const DAYS_PER_100_YEARS: u32 = DAYS_PER_4_YEARS * 25 - 1; // 36524
const DAYS_PER_400_YEARS: u32 = DAYS_PER_100_YEARS * 4 + 1; // 146097

const DAYS_TO_MONTH_365: [u32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
const DAYS_TO_MONTH_366: [u32; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// Decomposes a proleptic-Gregorian day number (days since 0001-01-01) into
/// calendar year, month and day.
pub(crate) fn civil_from_days(n: u32) -> (u32, u32, u32) {
    let mut n = n;
    // Whole 400-year periods since year 1.
    let y400 = n / DAYS_PER_400_YEARS;
    n -= y400 * DAYS_PER_400_YEARS;
    // Whole 100-year periods within the 400-year period; the last one has an
    // extra day.
    let mut y100 = n / DAYS_PER_100_YEARS;
    if y100 == 4 {
        y100 = 3;
    }
    n -= y100 * DAYS_PER_100_YEARS;
    // Whole 4-year periods within the 100-year period.
    let y4 = n / DAYS_PER_4_YEARS;
    n -= y4 * DAYS_PER_4_YEARS;
    // Whole years within the 4-year period; the last one has an extra day.
    let mut y1 = n / DAYS_PER_YEAR;
    if y1 == 4 {
        y1 = 3;
    }
    let year = y400 * 400 + y100 * 100 + y4 * 4 + y1 + 1;
    n -= y1 * DAYS_PER_YEAR;

    let days = if y1 == 3 && (y4 != 24 || y100 == 3) {
        &DAYS_TO_MONTH_366
    } else {
        &DAYS_TO_MONTH_365
    };

    // No month is 32 days or longer, so n >> 5 underestimates the month by
    // at most one.
    let mut m = (n >> 5) + 1;
    while n >= days[m as usize] {
        m += 1;
    }
    let day = n - days[m as usize - 1] + 1;

    (year, m, day)
}

fn write_date_parts(date: &NaiveDate, dst: &mut [u8]) -> bool {
    let days_from_ce = date.num_days_from_ce();
    if days_from_ce < 1 {
        return false;
    }

    let (year, month, day) = civil_from_days(days_from_ce as u32 - 1);
    if year > 9999 {
        return false;
    }

    write_four_digits(year, dst, 0);
    dst[4] = b'-';
    write_two_digits(month, dst, 5);
    dst[7] = b'-';
    write_two_digits(day, dst, 8);
    true
}

fn write_time_parts(time: &NaiveTime, dst: &mut [u8]) {
    let seconds = time.num_seconds_from_midnight();
    let micros = time.nanosecond() / 1_000 % 1_000_000;

    write_two_digits(seconds / 3600, dst, 0);
    dst[2] = b':';
    write_two_digits(seconds / 60 % 60, dst, 3);
    dst[5] = b':';
    write_two_digits(seconds % 60, dst, 6);
    dst[8] = b'.';
    write_digits(micros as u64, &mut dst[9..15]);
}

/// Writes `yyyy-MM-dd HH:mm:ss.ffffff`, 26 bytes.
///
/// Fails (returns `None`) when the buffer is too small or the year falls
/// outside 1..=9999; the caller's fallback handles the latter.
pub fn try_write_datetime(datetime: &NaiveDateTime, dst: &mut [u8]) -> Option<usize> {
    if dst.len() < DATETIME_LEN {
        return None;
    }

    if !write_date_parts(&datetime.date(), dst) {
        return None;
    }
    dst[10] = b' ';
    write_time_parts(&datetime.time(), &mut dst[11..]);

    Some(DATETIME_LEN)
}

/// Writes `yyyy-MM-dd`, 10 bytes.
pub fn try_write_date(date: &NaiveDate, dst: &mut [u8]) -> Option<usize> {
    if dst.len() < DATE_LEN {
        return None;
    }

    if !write_date_parts(date, dst) {
        return None;
    }

    Some(DATE_LEN)
}

/// Writes `HH:mm:ss.ffffff`, 15 bytes.
pub fn try_write_time(time: &NaiveTime, dst: &mut [u8]) -> Option<usize> {
    if dst.len() < TIME_LEN {
        return None;
    }

    write_time_parts(time, dst);

    Some(TIME_LEN)
}
