//! Seasonal narratives

use serde::Serialize;

/// A named run of calendar months
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Season {
    pub name: &'static str,
    pub first_month: u32,
    pub last_month: u32,
    /// Short description of the season's usual conditions
    pub outlook: &'static str,
}

impl Season {
    pub const fn new(
        name: &'static str,
        first_month: u32,
        last_month: u32,
        outlook: &'static str,
    ) -> Self {
        Self {
            name,
            first_month,
            last_month,
            outlook,
        }
    }

    fn contains(&self, month: u32) -> bool {
        (self.first_month..=self.last_month).contains(&month)
    }
}

/// Maps calendar months to seasons; months not covered by any listed
/// season (typically the year-end wrap) fall into `fallback`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeasonCalendar {
    pub seasons: Vec<Season>,
    pub fallback: Season,
}

impl SeasonCalendar {
    pub fn season_for(&self, month: u32) -> &Season {
        self.seasons
            .iter()
            .find(|s| s.contains(month))
            .unwrap_or(&self.fallback)
    }
}

/// Turns a target month and its seasonal adjustment into a sentence.
///
/// Templates may use `{season}` and `{outlook}` placeholders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeasonalNarrative {
    pub calendar: SeasonCalendar,
    /// Adjustments strictly above this read as "elevated"
    pub elevated_above: f64,
    /// Adjustments strictly below this read as "reduced"
    pub reduced_below: f64,
    pub elevated: &'static str,
    pub reduced: &'static str,
    pub moderate: &'static str,
}

impl SeasonalNarrative {
    pub fn describe(&self, month: u32, adjustment: f64) -> String {
        let season = self.calendar.season_for(month);
        let template = if adjustment > self.elevated_above {
            self.elevated
        } else if adjustment < self.reduced_below {
            self.reduced
        } else {
            self.moderate
        };

        template
            .replace("{season}", season.name)
            .replace("{outlook}", season.outlook)
    }
}
