pub mod analysis_config;
pub mod analysis_error;
pub mod boundary_filter;
pub mod entry_frequency;
pub mod heatmap_mapper;
pub mod objective_timer;
