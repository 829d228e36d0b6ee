//! Size: normalise `Size:` captures to gigabytes.

use super::model::SizeError;

const GB_PER_TB: f64 = 1024.0;

/// Parse a capture such as `1.2 TB` or `480 GB` into gigabytes.
///
/// Only the trailing unit is recognised; the number in front of it is
/// parsed as is, so `"1.2  TB"` is rejected rather than guessed at.
pub fn parse_size_gb(capture: &[u8]) -> Result<f64, SizeError> {
    let text = std::str::from_utf8(capture).map_err(|_| SizeError::NonUtf8)?;
    let text = text.trim();

    let (number, factor) = if let Some(tb) = text.strip_suffix(" TB") {
        (tb, GB_PER_TB)
    } else if let Some(gb) = text.strip_suffix(" GB") {
        (gb, 1.0)
    } else {
        return Err(SizeError::UnknownUnit(text.to_string()));
    };

    number
        .parse::<f64>()
        .map(|value| value * factor)
        .map_err(|source| SizeError::InvalidNumber {
            value: number.to_string(),
            source,
        })
}
