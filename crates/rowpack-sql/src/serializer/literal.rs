//! Literal writers behind the built-in type mappers.
//!
//! Each writer first encodes into a stack buffer through the try-write
//! encoders and only falls back to an allocating path when the value cannot
//! fit, mirroring the adapter contract in [`crate::encode`].

use super::Dialect;
use crate::encode::{datetime, digits, duration, escape, guid, hex, quote};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rowpack_core::{Error, Result};
use uuid::Uuid;

/// Stack buffer size for variable-length payloads (strings, bytes); larger
/// payloads take the heap path.
const STACK_BUF: usize = 1024;

fn push_encoded(dst: &mut String, bytes: &[u8]) -> Result<()> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| Error::format("literal encoder produced non-UTF-8 output"))?;
    dst.push_str(text);
    Ok(())
}

pub(super) fn write_bool(value: bool, dst: &mut String) -> Result<()> {
    dst.push(if value { '1' } else { '0' });
    Ok(())
}

pub(super) fn write_i64(value: i64, dst: &mut String) -> Result<()> {
    let mut buf = [0u8; 24];
    match digits::try_write_i64(value, &mut buf) {
        Some(n) => push_encoded(dst, &buf[..n]),
        None => Err(Error::format(format!("integer {value} did not fit its buffer"))),
    }
}

pub(super) fn write_u64(value: u64, dst: &mut String) -> Result<()> {
    let mut buf = [0u8; 24];
    match digits::try_write_u64(value, &mut buf) {
        Some(n) => push_encoded(dst, &buf[..n]),
        None => Err(Error::format(format!("integer {value} did not fit its buffer"))),
    }
}

pub(super) fn write_f64(value: f64, dst: &mut String) -> Result<()> {
    use std::fmt::Write;
    write!(dst, "{value}")?;
    Ok(())
}

pub(super) fn write_f32(value: f32, dst: &mut String) -> Result<()> {
    use std::fmt::Write;
    write!(dst, "{value}")?;
    Ok(())
}

pub(super) fn write_str(dialect: Dialect, value: &str, dst: &mut String) -> Result<()> {
    let (open, close) = dialect.string_quotes();
    let table = dialect.escape_table();
    let max = escape::escaped_max_len(value) + open.len() + close.len();

    if max <= STACK_BUF {
        let mut buf = [0u8; STACK_BUF];
        if let Some(n) = quote::try_quote(&mut buf[..max], open, close, |window| {
            escape::try_escape(value, table, window)
        }) {
            return push_encoded(dst, &buf[..n]);
        }
    }

    let mut buf = vec![0u8; max];
    let n = quote::try_quote(&mut buf, open, close, |window| {
        escape::try_escape(value, table, window)
    })
    .ok_or_else(|| {
        Error::format(format!(
            "escaped string of {} bytes did not fit in {max} bytes",
            value.len()
        ))
    })?;
    push_encoded(dst, &buf[..n])
}

pub(super) fn write_char(dialect: Dialect, value: char, dst: &mut String) -> Result<()> {
    let (open, close) = dialect.string_quotes();
    dst.push_str(open);
    match dialect.escape_table()(value) {
        Some(escaped) => dst.push_str(escaped),
        None => dst.push(value),
    }
    dst.push_str(close);
    Ok(())
}

pub(super) fn write_bytes(value: &[u8], dst: &mut String) -> Result<()> {
    let max = value.len() * 2 + 2;

    if max <= STACK_BUF {
        let mut buf = [0u8; STACK_BUF];
        if let Some(n) = quote::try_quote(&mut buf[..max], "0x", "", |window| {
            hex::try_write_hex(value, window)
        }) {
            return push_encoded(dst, &buf[..n]);
        }
    }

    let mut buf = vec![0u8; max];
    let n = quote::try_quote(&mut buf, "0x", "", |window| hex::try_write_hex(value, window))
        .ok_or_else(|| {
            Error::format(format!("hex literal for {} bytes did not fit", value.len()))
        })?;
    push_encoded(dst, &buf[..n])
}

pub(super) fn write_guid(value: &Uuid, dst: &mut String) -> Result<()> {
    let mut buf = [0u8; guid::GUID_LEN + 2];
    match quote::try_quote(&mut buf, "'", "'", |window| guid::try_write_guid(value, window)) {
        Some(n) => push_encoded(dst, &buf[..n]),
        None => Err(Error::format("GUID literal did not fit its buffer")),
    }
}

pub(super) fn write_datetime(value: &NaiveDateTime, dst: &mut String) -> Result<()> {
    use std::fmt::Write;

    let mut buf = [0u8; datetime::DATETIME_LEN + 2];
    match quote::try_quote(&mut buf, "'", "'", |window| {
        datetime::try_write_datetime(value, window)
    }) {
        Some(n) => push_encoded(dst, &buf[..n]),
        // Years outside 1..=9999 take the allocating formatter.
        None => {
            write!(dst, "'{}'", value.format("%Y-%m-%d %H:%M:%S%.6f"))?;
            Ok(())
        }
    }
}

pub(super) fn write_date(value: &NaiveDate, dst: &mut String) -> Result<()> {
    use std::fmt::Write;

    let mut buf = [0u8; datetime::DATE_LEN + 2];
    match quote::try_quote(&mut buf, "'", "'", |window| datetime::try_write_date(value, window)) {
        Some(n) => push_encoded(dst, &buf[..n]),
        None => {
            write!(dst, "'{}'", value.format("%Y-%m-%d"))?;
            Ok(())
        }
    }
}

pub(super) fn write_time(value: &NaiveTime, dst: &mut String) -> Result<()> {
    let mut buf = [0u8; datetime::TIME_LEN + 2];
    match quote::try_quote(&mut buf, "'", "'", |window| datetime::try_write_time(value, window)) {
        Some(n) => push_encoded(dst, &buf[..n]),
        None => Err(Error::format("time literal did not fit its buffer")),
    }
}

pub(super) fn write_duration(value: &TimeDelta, dst: &mut String) -> Result<()> {
    let mut buf = [0u8; duration::DURATION_MAX_LEN + 2];
    match quote::try_quote(&mut buf, "'", "'", |window| {
        duration::try_write_duration(value, window)
    }) {
        Some(n) => push_encoded(dst, &buf[..n]),
        None => Err(Error::format("duration literal did not fit its buffer")),
    }
}
