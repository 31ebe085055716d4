pub mod text_grid_reader;
