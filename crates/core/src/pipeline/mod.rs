pub mod cluster_embeddings_use_case;
pub mod cluster_report;
pub mod pipeline_logger;
pub mod scan_grid_use_case;
