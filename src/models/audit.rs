//! Audit trail records for calculation transparency.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application. Steps carry no timestamps so identical inputs produce
/// identical traces.
///
/// # Example
///
/// ```
/// use take_home_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "gross_income".to_string(),
///     rule_name: "Gross Income".to_string(),
///     input: serde_json::json!({ "hourly_rate": "35" }),
///     output: serde_json::json!({ "gross_income": "67200" }),
///     reasoning: "$35 × 40 hours × 48 weeks = $67200".to_string(),
/// };
/// assert_eq!(step.rule_id, "gross_income");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

impl AuditStep {
    /// Builds a step from its parts.
    pub fn new(
        step_number: u32,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) -> Self {
        Self {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        }
    }
}

/// Collects audit steps, numbering them in order.
#[derive(Debug, Default)]
pub(crate) struct AuditLog {
    steps: Vec<AuditStep>,
}

impl AuditLog {
    pub(crate) fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep::new(
            step_number,
            rule_id,
            rule_name,
            input,
            output,
            reasoning,
        ));
    }

    pub(crate) fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}
