pub mod alpha;
pub mod bounds;
pub mod detect;
pub mod export;
pub mod partition;
pub mod profile;
pub mod resize;
