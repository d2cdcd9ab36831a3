//! Audit reports generated for a model.

use serde::{Deserialize, Serialize};

/// Per-category bias reading shown on the report page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasMetric {
    /// Protected attribute, e.g. "Gender".
    pub category: String,
    pub bias: f64,
    /// Direction since the previous audit ("up", "down", "stable").
    pub trend: String,
}

/// A generated fairness audit.
///
/// `model_id` is a loose reference; nothing checks that the model exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub id: String,
    pub model_id: String,
    pub model_name: String,
    pub generated_date: String,
    pub fairness_score: u32,
    pub demographic_parity: f64,
    pub equal_opportunity: f64,
    pub predictive_equality: f64,
    pub bias_metrics: Vec<BiasMetric>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_parses_dashboard_json() {
        let json = r#"{
            "id": "r1", "modelId": "m1", "modelName": "Credit",
            "generatedDate": "2024-02-01", "fairnessScore": 81,
            "demographicParity": 0.91, "equalOpportunity": 0.88,
            "predictiveEquality": 0.85,
            "biasMetrics": [{"category": "Age", "bias": 12.5, "trend": "down"}],
            "recommendations": ["Rebalance training data"]
        }"#;
        let report: AuditReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.model_id, "m1");
        assert_eq!(report.bias_metrics[0].category, "Age");
        assert_eq!(report.recommendations.len(), 1);
    }
}
