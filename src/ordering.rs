//! Left-to-right order of the rolling lists for a locale.

use crate::{COMPONENT_COUNT, ComponentKind, Locale, prelude::*};

use crate::ComponentKind::{Day, Month, Year};

/// Regions that write dates month first
const MONTH_FIRST_REGIONS: &[&str] = &["US", "AS", "GU", "MP", "PR", "UM", "VI", "PH", "FM", "MH", "PW"];

/// Languages that write dates year first regardless of region
const YEAR_FIRST_LANGUAGES: &[&str] = &["zh", "ja", "ko", "hu", "lt", "mn"];

/// Regions that write dates year first
const YEAR_FIRST_REGIONS: &[&str] = &["CN", "TW", "JP", "KR", "KP", "HU", "LT", "MN"];

/// Display order of the three components. Always a permutation of
/// year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{}-{}", "kinds[0]", "kinds[1]", "kinds[2]")]
pub struct ComponentOrder {
    kinds:     [ComponentKind; COMPONENT_COUNT],
    // component index of each kind, indexed by `ComponentKind as usize`
    positions: [usize; COMPONENT_COUNT],
}

impl ComponentOrder {
    pub const MONTH_DAY_YEAR: Self = Self::from_kinds([Month, Day, Year]);
    pub const DAY_MONTH_YEAR: Self = Self::from_kinds([Day, Month, Year]);
    pub const YEAR_MONTH_DAY: Self = Self::from_kinds([Year, Month, Day]);

    const fn from_kinds(kinds: [ComponentKind; COMPONENT_COUNT]) -> Self {
        let mut positions = [0; COMPONENT_COUNT];
        let mut index = 0;
        while index < COMPONENT_COUNT {
            positions[kinds[index] as usize] = index;
            index += 1;
        }
        Self { kinds, positions }
    }

    /// Picks the conventional short-date order for a locale.
    ///
    /// The region decides when it is known to be month-first or year-first,
    /// then the language, and everything else is day-month-year. A bare `en`
    /// counts as `en-US`.
    pub fn for_locale(locale: &Locale) -> Self {
        let region = locale.region();
        let language = locale.language();

        if region.is_some_and(|r| MONTH_FIRST_REGIONS.contains(&r)) {
            Self::MONTH_DAY_YEAR
        } else if region.is_some_and(|r| YEAR_FIRST_REGIONS.contains(&r))
            || YEAR_FIRST_LANGUAGES.contains(&language)
        {
            Self::YEAR_MONTH_DAY
        } else if region.is_none() && language == "en" {
            Self::MONTH_DAY_YEAR
        } else {
            Self::DAY_MONTH_YEAR
        }
    }

    /// Kind shown at a component index
    pub fn kind_at(&self, index: usize) -> Option<ComponentKind> {
        self.kinds.get(index).copied()
    }

    /// Component index showing a kind
    pub const fn index_of(&self, kind: ComponentKind) -> usize {
        self.positions[kind as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.kinds.iter().copied()
    }

    pub const fn kinds(&self) -> [ComponentKind; COMPONENT_COUNT] {
        self.kinds
    }
}

impl Default for ComponentOrder {
    fn default() -> Self {
        Self::for_locale(&Locale::default())
    }
}
