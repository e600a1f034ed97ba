pub mod frame;
pub mod frame_loader;
pub mod frame_set;
pub mod ingestion_error;
pub mod inventory_item;
