mod error;
pub use error::RsidError;

/// Encode a textual RSID into its signed 32-bit integer key.
///
/// `"rsN"` encodes to `+N`, `"iN"` (an internal, vendor-specific marker) to
/// `-N`. Both namespaces share a single `i32` keyspace with no collisions,
/// since one is strictly non-negative and the other strictly negative.
///
/// # Errors
/// Returns [`RsidError::InvalidToken`] if `s` does not start with `rs` or
/// `i` followed by decimal digits, and [`RsidError::Overflow`] if the
/// numeric part does not fit in an `i32`.
pub fn encode(s: &str) -> Result<i32, RsidError> {
    let (digits, negative) = if let Some(rest) = s.strip_prefix("rs") {
        (rest, false)
    } else if let Some(rest) = s.strip_prefix('i') {
        (rest, true)
    } else {
        return Err(RsidError::InvalidToken(s.to_string()));
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RsidError::InvalidToken(s.to_string()));
    }

    let value: i32 = digits.parse().map_err(|_| RsidError::Overflow(s.to_string()))?;
    Ok(if negative { -value } else { value })
}

/// Decode a signed 32-bit RSID key back into its textual form: the inverse
/// of [`encode`]. Non-negative values render as `"rsN"`, negative values as
/// `"iN"`.
#[must_use]
pub fn decode(id: i32) -> String {
    if id < 0 {
        format!("i{}", -i64::from(id))
    } else {
        format!("rs{id}")
    }
}
