use std::path::Path;
use std::time::Instant;

use crate::clustering::domain::clusterer::Clusterer;
use crate::clustering::domain::embedding_reader::EmbeddingReader;
use crate::clustering::domain::embedding_set::EmbeddingSet;
use crate::clustering::domain::similarity_graph::{validate_threshold, SimilarityGraph};
use crate::pipeline::cluster_report::ClusterReport;
use crate::pipeline::pipeline_logger::{elapsed_ms, PipelineLogger};
use crate::shared::error::ClusterError;

/// Reads embeddings, links those closer than the threshold, and partitions
/// the resulting graph into identities.
pub struct ClusterEmbeddingsUseCase {
    reader: Box<dyn EmbeddingReader>,
    clusterer: Box<dyn Clusterer>,
    logger: Box<dyn PipelineLogger>,
}

impl ClusterEmbeddingsUseCase {
    pub fn new(
        reader: Box<dyn EmbeddingReader>,
        clusterer: Box<dyn Clusterer>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            clusterer,
            logger,
        }
    }

    /// Loads embeddings from `input` and clusters them.
    ///
    /// The threshold is validated before the file is touched.
    pub fn execute(&mut self, input: &Path, threshold: f64) -> Result<ClusterReport, ClusterError> {
        validate_threshold(threshold)?;

        let start = Instant::now();
        let embeddings = self.reader.read(input)?;
        self.logger.timing("read", elapsed_ms(start));

        self.cluster(&embeddings, threshold)
    }

    /// Clusters embeddings already in memory.
    pub fn cluster(
        &mut self,
        embeddings: &EmbeddingSet,
        threshold: f64,
    ) -> Result<ClusterReport, ClusterError> {
        self.logger.metric("embeddings", embeddings.len() as f64);
        self.logger.info(&format!(
            "Clustering {} embedding(s) of dimension {} (threshold={threshold})",
            embeddings.len(),
            embeddings.dimension()
        ));

        let start = Instant::now();
        let graph = SimilarityGraph::build(embeddings, threshold)?;
        self.logger.timing("graph", elapsed_ms(start));
        self.logger.metric("edges", graph.edge_count() as f64);

        let start = Instant::now();
        let assignment = self.clusterer.partition(&graph)?;
        self.logger.timing("partition", elapsed_ms(start));
        self.logger.metric("clusters", assignment.cluster_count() as f64);

        self.logger.info(&format!(
            "Found {} unique person(s)",
            assignment.cluster_count()
        ));
        self.logger.summary();

        Ok(ClusterReport::new(self.clusterer.name(), threshold, &assignment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::infrastructure::chinese_whispers_clusterer::ChineseWhispersClusterer;
    use crate::clustering::infrastructure::connected_components_clusterer::ConnectedComponentsClusterer;
    use crate::clustering::infrastructure::union_find_clusterer::UnionFindClusterer;
    use crate::pipeline::pipeline_logger::NullPipelineLogger;
    use std::sync::{Arc, Mutex};

    struct StubReader {
        embeddings: Vec<Vec<f32>>,
        reads: Arc<Mutex<usize>>,
    }

    impl EmbeddingReader for StubReader {
        fn read(&self, _path: &Path) -> Result<EmbeddingSet, ClusterError> {
            *self.reads.lock().unwrap() += 1;
            EmbeddingSet::new(self.embeddings.clone())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingLogger {
        messages: Arc<Mutex<Vec<String>>>,
        stages: Arc<Mutex<Vec<String>>>,
    }

    impl PipelineLogger for RecordingLogger {
        fn timing(&mut self, stage: &str, _duration_ms: f64) {
            self.stages.lock().unwrap().push(stage.to_string());
        }
        fn metric(&mut self, _name: &str, _value: f64) {}
        fn info(&mut self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn stub(embeddings: Vec<Vec<f32>>) -> (Box<dyn EmbeddingReader>, Arc<Mutex<usize>>) {
        let reads = Arc::new(Mutex::new(0));
        (
            Box::new(StubReader {
                embeddings,
                reads: reads.clone(),
            }),
            reads,
        )
    }

    fn faces() -> Vec<Vec<f32>> {
        vec![vec![0.0, 0.0], vec![0.1, 0.1], vec![10.0, 10.0]]
    }

    #[test]
    fn test_execute_reports_clusters() {
        let (reader, _) = stub(faces());
        let logger = RecordingLogger::default();
        let mut use_case = ClusterEmbeddingsUseCase::new(
            reader,
            Box::new(ConnectedComponentsClusterer::new()),
            Box::new(logger.clone()),
        );

        let report = use_case.execute(Path::new("faces.json"), 1.0).unwrap();
        assert_eq!(report.cluster_count, 2);
        assert_eq!(report.labels, vec![0, 0, 1]);
        assert_eq!(report.method, "components");

        let messages = logger.messages.lock().unwrap();
        assert!(messages.contains(&"Found 2 unique person(s)".to_string()));
        let stages = logger.stages.lock().unwrap();
        assert_eq!(*stages, vec!["read", "graph", "partition"]);
    }

    #[test]
    fn test_execute_rejects_threshold_before_reading() {
        let (reader, reads) = stub(faces());
        let mut use_case = ClusterEmbeddingsUseCase::new(
            reader,
            Box::new(UnionFindClusterer::new()),
            Box::new(NullPipelineLogger),
        );

        let err = use_case.execute(Path::new("faces.json"), -1.0).unwrap_err();
        assert!(matches!(err, ClusterError::InvalidThreshold(_)));
        assert_eq!(*reads.lock().unwrap(), 0);
    }

    #[test]
    fn test_execute_propagates_dimension_mismatch() {
        let (reader, _) = stub(vec![vec![0.0, 0.0], vec![1.0]]);
        let mut use_case = ClusterEmbeddingsUseCase::new(
            reader,
            Box::new(ConnectedComponentsClusterer::new()),
            Box::new(NullPipelineLogger),
        );
        let err = use_case.execute(Path::new("faces.json"), 0.6).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_cluster_empty_set() {
        let (reader, _) = stub(Vec::new());
        let mut use_case = ClusterEmbeddingsUseCase::new(
            reader,
            Box::new(ChineseWhispersClusterer::default()),
            Box::new(NullPipelineLogger),
        );
        let report = use_case.cluster(&EmbeddingSet::empty(), 0.6).unwrap();
        assert_eq!(report.cluster_count, 0);
        assert!(report.labels.is_empty());
        assert_eq!(report.method, "chinese-whispers");
    }
}
