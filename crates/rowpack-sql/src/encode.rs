//! Allocation-free literal encoders.
//!
//! Every writer here follows the same try-write contract: given a
//! fixed-capacity byte buffer, either the encoded value fits and the number
//! of bytes written is returned, or `None` is returned and the caller picks
//! a slower allocating path. Writers never leave a partially encoded value
//! the caller is expected to keep.
//!
//! Output is always ASCII or UTF-8 passed through unchanged, so the
//! serializer can splice the bytes back into a `String` without re-checking.

pub mod datetime;
pub mod digits;
pub mod duration;
pub mod escape;
pub mod guid;
pub mod hex;
pub mod quote;
