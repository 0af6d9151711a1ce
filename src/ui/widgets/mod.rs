pub mod talent_grid;
