//! Fly-in-fly-out roster model.
//!
//! A FIFO roster alternates a block of weeks on site with a block of weeks
//! at home. The named patterns are fixed; `custom` takes caller-supplied
//! block lengths, defaulting to two weeks on and one week off.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::scenario::{MAX_HOURS_PER_WEEK, MAX_WEEKLY_AMOUNT, ensure_within};

/// Weeks on site for a custom roster when none is supplied.
pub const DEFAULT_CUSTOM_WEEKS_ON: u32 = 2;

/// Weeks off site for a custom roster when none is supplied.
pub const DEFAULT_CUSTOM_WEEKS_OFF: u32 = 1;

/// A FIFO roster pattern.
///
/// # Example
///
/// ```
/// use take_home_engine::models::RosterPattern;
///
/// let roster: RosterPattern = "8-6".parse().unwrap();
/// assert_eq!(roster.weeks_on(), 8);
/// assert_eq!(roster.cycle_weeks(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pattern")]
pub enum RosterPattern {
    /// Two weeks on, one week off.
    #[serde(rename = "2-1")]
    TwoOne,
    /// Three weeks on, one week off.
    #[serde(rename = "3-1")]
    ThreeOne,
    /// Four weeks on, two weeks off.
    #[serde(rename = "4-2")]
    FourTwo,
    /// Eight weeks on, six weeks off.
    #[serde(rename = "8-6")]
    EightSix,
    /// Caller-defined block lengths.
    #[serde(rename = "custom")]
    Custom {
        /// Weeks on site per cycle.
        #[serde(default = "default_custom_weeks_on")]
        weeks_on: u32,
        /// Weeks at home per cycle.
        #[serde(default = "default_custom_weeks_off")]
        weeks_off: u32,
    },
}

fn default_custom_weeks_on() -> u32 {
    DEFAULT_CUSTOM_WEEKS_ON
}

fn default_custom_weeks_off() -> u32 {
    DEFAULT_CUSTOM_WEEKS_OFF
}

impl RosterPattern {
    /// Builds a pattern from its name and optional custom block lengths.
    ///
    /// The block lengths are ignored for named patterns. For `custom`, a
    /// missing value falls back to 2 weeks on / 1 week off, and a roster
    /// with zero weeks on site is rejected.
    pub fn from_parts(
        pattern: &str,
        weeks_on: Option<u32>,
        weeks_off: Option<u32>,
    ) -> EngineResult<Self> {
        let roster = match pattern.parse::<RosterPattern>()? {
            RosterPattern::Custom { .. } => RosterPattern::Custom {
                weeks_on: weeks_on.unwrap_or(DEFAULT_CUSTOM_WEEKS_ON),
                weeks_off: weeks_off.unwrap_or(DEFAULT_CUSTOM_WEEKS_OFF),
            },
            named => named,
        };
        roster.validate()?;
        Ok(roster)
    }

    /// Returns the (weeks on, weeks off) pair for this pattern.
    pub fn weeks(self) -> (u32, u32) {
        match self {
            RosterPattern::TwoOne => (2, 1),
            RosterPattern::ThreeOne => (3, 1),
            RosterPattern::FourTwo => (4, 2),
            RosterPattern::EightSix => (8, 6),
            RosterPattern::Custom {
                weeks_on,
                weeks_off,
            } => (weeks_on, weeks_off),
        }
    }

    /// Weeks on site per cycle.
    pub fn weeks_on(self) -> u32 {
        self.weeks().0
    }

    /// Total length of one on/off cycle in weeks.
    pub fn cycle_weeks(self) -> u32 {
        let (on, off) = self.weeks();
        on.saturating_add(off)
    }

    /// Rejects a custom roster with no weeks on site.
    pub fn validate(self) -> EngineResult<()> {
        if self.weeks_on() == 0 {
            return Err(EngineError::invalid_input(
                "roster_pattern",
                "custom roster must have at least one week on site",
            ));
        }
        Ok(())
    }
}

impl FromStr for RosterPattern {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "2-1" => Ok(RosterPattern::TwoOne),
            "3-1" => Ok(RosterPattern::ThreeOne),
            "4-2" => Ok(RosterPattern::FourTwo),
            "8-6" => Ok(RosterPattern::EightSix),
            "custom" => Ok(RosterPattern::Custom {
                weeks_on: DEFAULT_CUSTOM_WEEKS_ON,
                weeks_off: DEFAULT_CUSTOM_WEEKS_OFF,
            }),
            other => Err(EngineError::invalid_input(
                "roster_pattern",
                format!("unknown roster pattern '{}'", other),
            )),
        }
    }
}

impl fmt::Display for RosterPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterPattern::Custom {
                weeks_on,
                weeks_off,
            } => write!(f, "custom ({}-{})", weeks_on, weeks_off),
            named => {
                let (on, off) = named.weeks();
                write!(f, "{}-{}", on, off)
            }
        }
    }
}

/// FIFO roster and living-away-from-home settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FifoConfig {
    /// Whether the worker is on a FIFO roster at all.
    pub enabled: bool,
    /// The on/off roster pattern.
    pub roster: RosterPattern,
    /// Employer provides accommodation on site.
    #[serde(default)]
    pub accommodation_provided: bool,
    /// Employer provides meals on site.
    #[serde(default)]
    pub meals_provided: bool,
    /// Overrides both weekly LAFHA components when set.
    #[serde(default)]
    pub lafha_per_week: Option<Decimal>,
    /// Paid travel hours per roster cycle.
    #[serde(default)]
    pub paid_travel_hours: Decimal,
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

impl FifoConfig {
    /// A config representing a worker who is not on a FIFO roster.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            roster: RosterPattern::TwoOne,
            accommodation_provided: false,
            meals_provided: false,
            lafha_per_week: None,
            paid_travel_hours: Decimal::ZERO,
        }
    }

    /// An enabled roster with no provided accommodation, meals or travel.
    pub fn roster(roster: RosterPattern) -> Self {
        Self {
            enabled: true,
            roster,
            ..Self::disabled()
        }
    }

    /// Checks the roster shape and that money and hour values are non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.enabled {
            return Ok(());
        }
        self.roster.validate()?;
        if let Some(lafha) = self.lafha_per_week {
            ensure_within("lafha_per_week", lafha, MAX_WEEKLY_AMOUNT)?;
        }
        ensure_within("paid_travel_hours", self.paid_travel_hours, MAX_HOURS_PER_WEEK)
    }
}
