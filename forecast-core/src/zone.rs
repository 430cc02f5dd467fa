use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;
use tracing::warn;

/// Time zone used to interpret provider timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The zone of the machine running the request.
    #[default]
    Local,
    Named(Tz),
}

impl Zone {
    /// Parse an IANA identifier such as `"Europe/Berlin"`.
    pub fn parse(name: &str) -> Option<Self> {
        name.parse::<Tz>().ok().map(Zone::Named)
    }

    /// Apply the identifier a response carries, keeping `self` when it is
    /// absent or not a known zone.
    pub fn resolve(self, identifier: Option<&str>) -> Self {
        match identifier {
            None => {
                warn!(zone = %self, "No timezone set in response");
                self
            }
            Some(name) => Zone::parse(name).unwrap_or_else(|| {
                warn!(timezone = name, zone = %self, "Unknown timezone used in response");
                self
            }),
        }
    }

    /// Convert epoch seconds to a wall-clock time in this zone.
    pub fn localize(self, secs: i64) -> Option<DateTime<FixedOffset>> {
        let utc = DateTime::from_timestamp(secs, 0)?;
        Some(match self {
            Zone::Local => utc.with_timezone(&Local).fixed_offset(),
            Zone::Named(tz) => utc.with_timezone(&tz).fixed_offset(),
        })
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}
