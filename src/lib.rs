//! Derived statistics over a recorded tactical-match frame dataset.
//!
//! The pipeline has three stages: `frame_ingestion` loads the recorded
//! per-tick player snapshots and augments them with derived weapon-class
//! labels, `state_analysis` computes the spatial and loadout statistics over
//! the augmented set, and `report_output` assembles and writes the results.

pub mod frame_ingestion;
pub mod report_output;
pub mod state_analysis;
