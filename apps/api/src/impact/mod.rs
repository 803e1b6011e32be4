// AI Impact Scoring Engine
// Keyword taxonomy → per-task scoring and classification → occupation aggregate →
// agent and skill recommendations → narrative. Pure and synchronous; no I/O.

pub mod agents;
pub mod aggregator;
pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod handlers;
pub mod narrative;
pub mod scorer;
pub mod skills;
pub mod taxonomy;
