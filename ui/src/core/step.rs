//! The `Step` record served by the steps endpoint.

use serde::{Deserialize, Serialize};

/// One reusable pipeline unit as listed in the library.
///
/// Field names on the wire keep the `step_` prefix used by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "step_id")]
    pub id: String,
    #[serde(rename = "step_name")]
    pub name: String,
    #[serde(rename = "step_inputs")]
    pub inputs: String,
    #[serde(rename = "step_outputs")]
    pub outputs: String,
    #[serde(rename = "step_code")]
    pub code: String,
    #[serde(rename = "step_framework")]
    pub framework: String,
    #[serde(rename = "step_downloads")]
    pub downloads: u64,
    /// Absent or `null` creators are common in older records.
    #[serde(
        rename = "step_creator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creator: Option<String>,
}

/// The two demo records bundled for offline use (`sample-data` feature).
pub fn sample_steps() -> Vec<Step> {
    vec![
        Step {
            id: "123-123-123-123".into(),
            name: "Data Preprocessing".into(),
            inputs: ".csv file".into(),
            outputs: ".csv file".into(),
            code: "some \n code \n blah blah blah blah".into(),
            framework: "Prefect".into(),
            downloads: 1234,
            creator: Some("abhiram".into()),
        },
        Step {
            id: "567-567-567-567".into(),
            name: "Feature Extraction".into(),
            inputs: "array".into(),
            outputs: "array".into(),
            code: "some \n code \n blah blah blah blah".into(),
            framework: "Prefect".into(),
            downloads: 1234,
            creator: Some("venkat".into()),
        },
    ]
}
