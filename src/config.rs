//! Calendar configuration: which calendar, which locale, which UTC offset.
//!
//! A [`CalendarConfig`] is a plain value. The roller never edits one in place;
//! every setter builds a new config with `with_*` and swaps it in.

use std::{env, fmt, str::FromStr};

use chrono::{FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, prelude::*};

/// Environment variables consulted for the system locale, most specific first
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Calendar system identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarId {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
}

impl FromStr for CalendarId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" | "gregory" => Ok(Self::Gregorian),
            _ => Err(ConfigError::UnknownCalendar(s.to_owned())),
        }
    }
}

/// A language tag reduced to what date ordering needs: language and region.
///
/// Accepts BCP 47 style (`en-US`, `zh-Hant-TW`) and POSIX style
/// (`en_US.UTF-8`, `de_DE@euro`). Script subtags are accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region:   Option<String>,
}

impl Locale {
    /// Lowercase ISO 639 language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase ISO 3166 region code (or UN M.49 digits), if any
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Reads `LC_ALL`, `LC_TIME` and `LANG` in that order.
    /// Unset, empty, `C` and `POSIX` values are skipped. Falls back to `en-US`.
    pub fn from_env() -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find_map(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn is_language(tag: &str) -> bool {
        (2..=3).contains(&tag.len()) && tag.chars().all(|c| c.is_ascii_alphabetic())
    }

    fn is_script(tag: &str) -> bool {
        tag.len() == 4 && tag.chars().all(|c| c.is_ascii_alphabetic())
    }

    fn is_region(tag: &str) -> bool {
        (tag.len() == 2 && tag.chars().all(|c| c.is_ascii_alphabetic()))
            || (tag.len() == 3 && tag.chars().all(|c| c.is_ascii_digit()))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            region:   Some("US".to_owned()),
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidLocale(s.to_owned());

        // POSIX names carry an encoding and modifier we don't care about
        let base = s.trim().split(['.', '@']).next().unwrap_or_default();
        let mut subtags = base.split(['-', '_']);

        let language = subtags
            .next()
            .filter(|tag| Self::is_language(tag))
            .ok_or_else(invalid)?
            .to_ascii_lowercase();

        let mut region = None;
        for tag in subtags {
            if region.is_none() && Self::is_script(tag) {
                continue;
            }
            if region.is_none() && Self::is_region(tag) {
                region = Some(tag.to_ascii_uppercase());
                continue;
            }
            return Err(invalid());
        }

        Ok(Self { language, region })
    }
}

impl TryFrom<String> for Locale {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

/// A fixed offset from UTC, serialized as seconds east of UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[display(fmt = "{_0}")]
pub struct UtcOffset(FixedOffset);

impl UtcOffset {
    /// Creates an offset, validating it is strictly within ±24h
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidUtcOffset` if the offset is out of bounds.
    pub fn from_seconds(seconds: i32) -> Result<Self, ConfigError> {
        FixedOffset::east_opt(seconds)
            .map(Self)
            .ok_or(ConfigError::InvalidUtcOffset(seconds))
    }

    /// UTC itself
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// The offset currently in effect on the local clock
    pub fn local() -> Self {
        Self(*Local::now().offset())
    }

    /// Seconds east of UTC
    #[inline]
    pub fn seconds(self) -> i32 {
        self.0.local_minus_utc()
    }

    #[inline]
    pub const fn fixed(self) -> FixedOffset {
        self.0
    }
}

impl TryFrom<i32> for UtcOffset {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_seconds(value)
    }
}

impl From<UtcOffset> for i32 {
    fn from(offset: UtcOffset) -> Self {
        offset.seconds()
    }
}

impl From<FixedOffset> for UtcOffset {
    fn from(offset: FixedOffset) -> Self {
        Self(offset)
    }
}

/// Calendar, locale and timezone used to decompose the selected instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    calendar: CalendarId,
    #[serde(default)]
    locale:   Locale,
    #[serde(default = "UtcOffset::utc")]
    timezone: UtcOffset,
}

impl CalendarConfig {
    pub const fn new(calendar: CalendarId, locale: Locale, timezone: UtcOffset) -> Self {
        Self {
            calendar,
            locale,
            timezone,
        }
    }

    /// Locale from the environment, offset from the local clock.
    pub fn system() -> Self {
        Self::new(CalendarId::default(), Locale::from_env(), UtcOffset::local())
    }

    pub const fn calendar(&self) -> CalendarId {
        self.calendar
    }

    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    pub const fn timezone(&self) -> UtcOffset {
        self.timezone
    }

    #[must_use]
    pub fn with_calendar(&self, calendar: CalendarId) -> Self {
        Self {
            calendar,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_timezone(&self, timezone: UtcOffset) -> Self {
        Self {
            timezone,
            ..self.clone()
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::system()
    }
}
