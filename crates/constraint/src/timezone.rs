//! Timezone requirements for date-time values.

use std::fmt;

use chrono::{FixedOffset, Offset, Utc};
use chrono_tz::Tz;

use crate::error::{ConstraintError, Result};

/// What a date-time value must carry in terms of timezone information.
///
/// # Examples
///
/// ```
/// use nebula_constraint::TimezoneRequirement;
///
/// let naive = TimezoneRequirement::Naive;
/// let any_zone = TimezoneRequirement::Aware;
/// let abidjan = TimezoneRequirement::zone("Africa/Abidjan").unwrap();
/// assert!(abidjan.is_aware());
/// assert!(!naive.is_aware());
/// assert!(any_zone.is_aware());
/// ```
///
/// Pinning a single zone is rarely what a schema wants. Prefer
/// [`TimezoneRequirement::Aware`] unless the value really must come from
/// one specific zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimezoneRequirement {
    /// The value must not carry any timezone.
    Naive,
    /// The value must carry a timezone; any zone is accepted.
    Aware,
    /// The value must be in exactly this IANA zone.
    Zone(Tz),
    /// The value must have exactly this fixed UTC offset.
    Offset(FixedOffset),
}

impl TimezoneRequirement {
    /// Requires the IANA zone with the given name, e.g. `"Europe/Moscow"`.
    pub fn zone(name: &str) -> Result<Self> {
        name.parse::<Tz>()
            .map(Self::Zone)
            .map_err(|_| ConstraintError::UnknownTimezone {
                name: name.to_owned(),
            })
    }

    /// Requires a UTC offset of zero.
    #[must_use]
    pub fn utc() -> Self {
        Self::Offset(Utc.fix())
    }

    /// Whether values satisfying this requirement carry a timezone.
    #[must_use]
    pub fn is_aware(&self) -> bool {
        !matches!(self, Self::Naive)
    }
}

impl From<Tz> for TimezoneRequirement {
    fn from(tz: Tz) -> Self {
        Self::Zone(tz)
    }
}

impl From<FixedOffset> for TimezoneRequirement {
    fn from(offset: FixedOffset) -> Self {
        Self::Offset(offset)
    }
}

impl fmt::Display for TimezoneRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => f.write_str("naive"),
            Self::Aware => f.write_str("aware"),
            Self::Zone(tz) => f.write_str(tz.name()),
            Self::Offset(offset) => write!(f, "{offset}"),
        }
    }
}
