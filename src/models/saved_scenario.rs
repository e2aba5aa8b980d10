//! User-saved scenario snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ComparisonInputs;

/// A snapshot of calculator inputs saved for side-by-side comparison.
///
/// Only raw inputs are stored; results are recomputed on demand. The id is a
/// UUID v7, so it is time-ordered with a random suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedScenario {
    /// Generated identifier.
    pub id: Uuid,
    /// User-supplied label.
    pub name: String,
    /// Trade preset id or free-text trade name.
    pub trade: String,
    /// Hourly rate used for both structures.
    pub hourly_rate: Decimal,
    /// Hours worked per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year.
    pub weeks_per_year: Decimal,
    /// Share of ABN gross income spent on deductible expenses.
    pub expense_rate: Decimal,
    /// Whether the contractor funds their own super.
    pub include_super: bool,
    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,
}

/// The fields a user supplies when saving a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    /// User-supplied label.
    pub name: String,
    /// Trade preset id or free-text trade name.
    pub trade: String,
    /// Hourly rate used for both structures.
    pub hourly_rate: Decimal,
    /// Hours worked per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year.
    pub weeks_per_year: Decimal,
    /// Share of ABN gross income spent on deductible expenses.
    pub expense_rate: Decimal,
    /// Whether the contractor funds their own super.
    pub include_super: bool,
}

impl ScenarioDraft {
    /// The comparison inputs this draft describes.
    pub fn to_comparison_inputs(&self) -> ComparisonInputs {
        ComparisonInputs::same_rate(
            self.hourly_rate,
            self.hours_per_week,
            self.weeks_per_year,
            self.expense_rate,
            self.include_super,
        )
    }
}

impl SavedScenario {
    /// Stamps a draft with a fresh id and the current time.
    pub fn from_draft(draft: ScenarioDraft) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: draft.name,
            trade: draft.trade,
            hourly_rate: draft.hourly_rate,
            hours_per_week: draft.hours_per_week,
            weeks_per_year: draft.weeks_per_year,
            expense_rate: draft.expense_rate,
            include_super: draft.include_super,
            timestamp: Utc::now(),
        }
    }

    /// The comparison inputs stored in this snapshot.
    pub fn to_comparison_inputs(&self) -> ComparisonInputs {
        ComparisonInputs::same_rate(
            self.hourly_rate,
            self.hours_per_week,
            self.weeks_per_year,
            self.expense_rate,
            self.include_super,
        )
    }
}
