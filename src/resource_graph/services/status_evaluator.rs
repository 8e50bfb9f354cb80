use crate::resource_graph::domain::{ResourceObject, StatusSummary};
use crate::resource_graph::policies::{default_rules, KindStatus};

/// StatusEvaluator service classifying the health of observed objects
///
/// Dispatches to the `KindStatus` rule registered for the object's kind and
/// falls back to `unknown` for kinds without a rule. Evaluation never fails.
pub struct StatusEvaluator {
    rules: Vec<Box<dyn KindStatus>>,
}

impl StatusEvaluator {
    /// Creates an evaluator with the default workload rules
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Creates an evaluator with no rules; every object evaluates to unknown
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registers an additional rule; later rules take precedence for the
    /// kinds they cover
    pub fn with_rule(mut self, rule: Box<dyn KindStatus>) -> Self {
        self.rules.insert(0, rule);
        self
    }

    /// Classifies `object`
    ///
    /// Kinds match case-insensitively, like aggregation and root lookup.
    ///
    /// # Arguments
    /// * `object` - The observed object
    /// * `title` - Display title of the kind, used in the detail text
    pub fn evaluate(&self, object: &ResourceObject, title: &str) -> StatusSummary {
        let kind = object.kind.trim();
        self.rules
            .iter()
            .find(|rule| rule.kinds().iter().any(|k| k.eq_ignore_ascii_case(kind)))
            .map(|rule| rule.evaluate(object, title))
            .unwrap_or_else(|| StatusSummary::unknown(title))
    }
}

impl Default for StatusEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
