use serde::{Deserialize, Serialize};

use crate::clustering::domain::cluster_assignment::ClusterAssignment;
use crate::shared::palette::color_for_label;

/// Serializable outcome of one clustering run, handed to whatever renders
/// or names the clusters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    pub method: String,
    pub distance_threshold: f64,
    pub embedding_count: usize,
    pub cluster_count: usize,
    pub labels: Vec<usize>,
    pub groups: Vec<Vec<usize>>,
    /// Display colour per item, as `#rrggbb`.
    pub colors: Vec<String>,
}

impl ClusterReport {
    pub fn new(method: &str, distance_threshold: f64, assignment: &ClusterAssignment) -> Self {
        Self {
            method: method.to_string(),
            distance_threshold,
            embedding_count: assignment.len(),
            cluster_count: assignment.cluster_count(),
            labels: assignment.labels().to_vec(),
            groups: assignment.groups(),
            colors: assignment
                .labels()
                .iter()
                .map(|label| color_for_label(*label).to_hex())
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_assignment() {
        let assignment = ClusterAssignment::from_raw_labels(&[3, 3, 8]);
        let report = ClusterReport::new("components", 0.6, &assignment);
        assert_eq!(report.embedding_count, 3);
        assert_eq!(report.cluster_count, 2);
        assert_eq!(report.labels, vec![0, 0, 1]);
        assert_eq!(report.groups, vec![vec![0, 1], vec![2]]);
        assert_eq!(report.colors, vec!["#e6194b", "#e6194b", "#f58231"]);
    }

    #[test]
    fn test_to_json_field_names() {
        let report = ClusterReport::new("union-find", 1.0, &ClusterAssignment::empty());
        let json = report.to_json().unwrap();
        assert!(json.contains("\"method\": \"union-find\""));
        assert!(json.contains("\"cluster_count\": 0"));
        let parsed: ClusterReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
