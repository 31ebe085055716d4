use std::path::Path;
use std::time::Instant;

use crate::grid::domain::grid_reader::GridReader;
use crate::grid::domain::region_scanner::{GridRegion, RegionScanner};
use crate::pipeline::pipeline_logger::{elapsed_ms, PipelineLogger};
use crate::shared::error::ClusterError;

/// Loads a grid and reports its filled regions in discovery order.
pub struct ScanGridUseCase {
    reader: Box<dyn GridReader>,
    scanner: RegionScanner,
    logger: Box<dyn PipelineLogger>,
}

impl ScanGridUseCase {
    pub fn new(reader: Box<dyn GridReader>, logger: Box<dyn PipelineLogger>) -> Self {
        Self {
            reader,
            scanner: RegionScanner::new(),
            logger,
        }
    }

    pub fn execute(&mut self, input: &Path) -> Result<Vec<GridRegion>, ClusterError> {
        let start = Instant::now();
        let grid = self.reader.read(input)?;
        self.logger.timing("read", elapsed_ms(start));

        let start = Instant::now();
        let regions = self.scanner.scan(&grid);
        self.logger.timing("scan", elapsed_ms(start));
        self.logger.metric("regions", regions.len() as f64);

        self.logger.info(&format!(
            "Found {} region(s) in {}x{} grid",
            regions.len(),
            grid.rows(),
            grid.cols()
        ));
        self.logger.summary();
        Ok(regions)
    }
}
