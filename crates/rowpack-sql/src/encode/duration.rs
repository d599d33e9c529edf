use super::digits::{count_digits, write_digits, write_two_digits};

use chrono::TimeDelta;

/// Upper bound for a rendered duration: sign, 16 hour digits, `:mm:ss`,
/// `.ffffff`.
pub const DURATION_MAX_LEN: usize = 30;

/// Writes a signed duration as `[-]HH:mm:ss[.ffffff]`.
///
/// The hour field starts at two digits and widens as needed; the fractional
/// part is omitted when the duration is a whole number of seconds.
pub fn try_write_duration(duration: &TimeDelta, dst: &mut [u8]) -> Option<usize> {
    let negative = *duration < TimeDelta::zero();
    let magnitude = duration.abs();

    let total_seconds = magnitude.num_seconds() as u64;
    let micros = (magnitude.subsec_nanos() / 1_000) as u64;

    let hours = total_seconds / 3600;
    let minutes = total_seconds / 60 % 60;
    let seconds = total_seconds % 60;

    let hour_digits = count_digits(hours).max(2);
    let mut required = hour_digits + 6; // ":mm:ss"
    if negative {
        required += 1;
    }
    if micros != 0 {
        required += 7; // ".ffffff"
    }

    if dst.len() < required {
        return None;
    }

    let mut idx = 0;
    if negative {
        dst[idx] = b'-';
        idx += 1;
    }

    write_digits(hours, &mut dst[idx..idx + hour_digits]);
    idx += hour_digits;
    dst[idx] = b':';
    write_two_digits(minutes as u32, dst, idx + 1);
    dst[idx + 3] = b':';
    write_two_digits(seconds as u32, dst, idx + 4);
    idx += 6;

    if micros != 0 {
        dst[idx] = b'.';
        write_digits(micros, &mut dst[idx + 1..idx + 7]);
        idx += 7;
    }

    Some(idx)
}
