pub mod cluster_assignment;
pub mod clusterer;
pub mod embedding_reader;
pub mod embedding_set;
pub mod similarity_graph;
