//! Fixed demo data used to populate the dashboard without a backend.

use super::catalog::{Dataset, Model, ModelStatus};
use super::community::{Badge, CommunityPost};
use super::report::{AuditReport, BiasMetric};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| (*t).to_string()).collect()
}

pub fn demo_models() -> Vec<Model> {
    vec![
        Model {
            id: "demo-model-1".to_string(),
            name: "Credit Risk Classifier v2.1".to_string(),
            model_type: "Classification".to_string(),
            tags: tags(&["finance", "lending", "tabular"]),
            description: "Gradient-boosted model scoring consumer loan applications.".to_string(),
            upload_date: "2024-03-12".to_string(),
            fairness_score: 78,
            status: ModelStatus::Complete,
        },
        Model {
            id: "demo-model-2".to_string(),
            name: "Resume Screening Transformer".to_string(),
            model_type: "NLP".to_string(),
            tags: tags(&["hiring", "nlp"]),
            description: "Ranks applicant resumes against job descriptions.".to_string(),
            upload_date: "2024-03-18".to_string(),
            fairness_score: 54,
            status: ModelStatus::Flagged,
        },
    ]
}

pub fn demo_datasets() -> Vec<Dataset> {
    vec![
        Dataset {
            id: "demo-dataset-1".to_string(),
            name: "Adult Census Income".to_string(),
            dataset_type: "Tabular".to_string(),
            tags: tags(&["census", "income"]),
            description: "Income bracket prediction from 1994 census records.".to_string(),
            upload_date: "2024-03-10".to_string(),
            sample_count: 48_842,
        },
        Dataset {
            id: "demo-dataset-2".to_string(),
            name: "Job Applicant Resumes".to_string(),
            dataset_type: "Text".to_string(),
            tags: tags(&["hiring", "text"]),
            description: "Anonymised resumes with recruiter outcomes.".to_string(),
            upload_date: "2024-03-15".to_string(),
            sample_count: 12_500,
        },
    ]
}

pub fn demo_reports() -> Vec<AuditReport> {
    vec![AuditReport {
        id: "demo-report-1".to_string(),
        model_id: "demo-model-1".to_string(),
        model_name: "Credit Risk Classifier v2.1".to_string(),
        generated_date: "2024-03-14".to_string(),
        fairness_score: 78,
        demographic_parity: 0.84,
        equal_opportunity: 0.79,
        predictive_equality: 0.81,
        bias_metrics: vec![
            BiasMetric {
                category: "Gender".to_string(),
                bias: 12.0,
                trend: "down".to_string(),
            },
            BiasMetric {
                category: "Age".to_string(),
                bias: 18.0,
                trend: "up".to_string(),
            },
            BiasMetric {
                category: "Ethnicity".to_string(),
                bias: 9.0,
                trend: "stable".to_string(),
            },
        ],
        recommendations: vec![
            "Reweight training samples for applicants over 60.".to_string(),
            "Audit proxy features correlated with postcode.".to_string(),
        ],
    }]
}

/// Newest first, matching how the board stores posts.
pub fn demo_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "demo-post-1".to_string(),
            author: "Dr. Amara Okafor".to_string(),
            role: "Fairness Researcher".to_string(),
            trust_score: 92,
            title: "Age bias creeping back into credit models".to_string(),
            summary: "Recent audits show the age gap widening after retraining on 2023 data."
                .to_string(),
            upvotes: 47,
            downvotes: 3,
            comments: 12,
            badge: Badge::Expert,
            timestamp: "2024-03-16T09:30:00Z".to_string(),
        },
        CommunityPost {
            id: "demo-post-2".to_string(),
            author: "Miguel Torres".to_string(),
            role: "Data Scientist".to_string(),
            trust_score: 74,
            title: "Checklist for auditing resume screeners".to_string(),
            summary: "A short list of tests we run before shipping any hiring model.".to_string(),
            upvotes: 21,
            downvotes: 1,
            comments: 5,
            badge: Badge::Contributor,
            timestamp: "2024-03-15T14:05:00Z".to_string(),
        },
    ]
}
