//! ts-physics: the deterministic thermal-resistance-network solver.
//!
//! Computes the steady-state junction temperature of a processor cooled by a
//! finned heat sink under forced-air convection. The model is a series
//! resistance chain:
//!
//! ```text
//! T_junction --[R_jc]--[R_tim]--[R_base]--[R_conv]-- T_ambient
//! ```
//!
//! Every operation here is a pure function of its numeric arguments: no I/O,
//! no shared state, no allocation beyond the return value. Each function
//! validates its own inputs eagerly and fails with [`PhysicsError`] before
//! performing any arithmetic, so the chain never produces NaN or infinity
//! silently.

pub mod analysis;
pub mod common;
pub mod conduction;
pub mod convection;
pub mod error;
pub mod geometry;
pub mod materials;
pub mod model;
pub mod network;
pub mod solver;
pub mod tim;

// Re-export key types for convenience
pub use analysis::{AnalysisResult, ResistanceBreakdown, ThermalAnalysis};
pub use error::{PhysicsError, PhysicsResult};
pub use model::{AirProperties, Die, HeatSinkGeometry, TimLayer};
