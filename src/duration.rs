//! ISO-8601-style duration tokens and the coarse time buckets derived from
//! them.

use once_cell::sync::Lazy;
use regex::Regex;

/// `PT` followed by optional hour and minute segments, hours first.
/// Seconds and calendar units are not part of the grammar here.
static ISO_DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?").expect("duration pattern is valid"));

/// Convert a `PT<N>H<N>M` token to whole minutes.
///
/// Missing segments count as zero, so a bare `PT` parses to 0 minutes.
/// Tokens without the `PT` marker yield `None`.
pub fn parse_duration(token: &str) -> Option<u32> {
    let caps = ISO_DURATION_RE.captures(token)?;
    let hours: u32 = caps
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let minutes: u32 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some(hours * 60 + minutes)
}

/// Coarse total-time bucket used as the leading tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    UpTo15,
    UpTo30,
    UpTo45,
    UpTo60,
    Over60,
}

impl TimeBucket {
    /// Bucket a positive minute count. Zero minutes gets no bucket. Each
    /// threshold is inclusive on the upper bound: exactly 30 minutes is
    /// still the 30-minute bucket.
    pub fn from_minutes(total: u32) -> Option<Self> {
        match total {
            0 => None,
            1..=15 => Some(Self::UpTo15),
            16..=30 => Some(Self::UpTo30),
            31..=45 => Some(Self::UpTo45),
            46..=60 => Some(Self::UpTo60),
            _ => Some(Self::Over60),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo15 => "15 Minutes",
            Self::UpTo30 => "30 Minutes",
            Self::UpTo45 => "45 Minutes",
            Self::UpTo60 => "1 Hour",
            Self::Over60 => "1 Hour+",
        }
    }
}
