pub mod grid;
pub mod grid_reader;
pub mod region_scanner;
