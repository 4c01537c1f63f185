//! Core processing building blocks: alpha bounds and stripping, row-color
//! profiling, dividing-line detection, partitioning, resize, and section
//! export. These are internal primitives consumed by the high-level `api`
//! module.
pub mod params;
pub mod processing;
