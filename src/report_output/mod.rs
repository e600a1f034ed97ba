pub mod analysis_report;
pub mod overlay_document;
pub mod report_builder;
pub mod report_error;
pub mod report_writer;
