use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clustering::domain::clusterer::Clusterer;
use crate::shared::error::ClusterError;

use super::chinese_whispers_clusterer::ChineseWhispersClusterer;
use super::connected_components_clusterer::ConnectedComponentsClusterer;
use super::union_find_clusterer::UnionFindClusterer;

/// Partitioning strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClusterMethod {
    #[default]
    Components,
    UnionFind,
    ChineseWhispers,
}

impl ClusterMethod {
    pub const ALL: &[ClusterMethod] = &[
        ClusterMethod::Components,
        ClusterMethod::UnionFind,
        ClusterMethod::ChineseWhispers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClusterMethod::Components => "components",
            ClusterMethod::UnionFind => "union-find",
            ClusterMethod::ChineseWhispers => "chinese-whispers",
        }
    }
}

impl std::fmt::Display for ClusterMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClusterMethod::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                format!("Cluster method must be one of: components, union-find, chinese-whispers, got '{s}'")
            })
    }
}

/// Creates the clusterer for `method`. `max_iterations` and `seed` only
/// apply to Chinese Whispers.
pub fn create_clusterer(
    method: ClusterMethod,
    max_iterations: usize,
    seed: u64,
) -> Result<Box<dyn Clusterer>, ClusterError> {
    log::info!("Using {method} clustering");
    match method {
        ClusterMethod::Components => Ok(Box::new(ConnectedComponentsClusterer::new())),
        ClusterMethod::UnionFind => Ok(Box::new(UnionFindClusterer::new())),
        ClusterMethod::ChineseWhispers => {
            log::info!("Chinese Whispers: max_iterations={max_iterations}, seed={seed}");
            Ok(Box::new(ChineseWhispersClusterer::new(max_iterations, seed)?))
        }
    }
}
