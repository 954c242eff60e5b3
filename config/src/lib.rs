//! # Config Crate
//!
//! Centralized configuration constants for primitive tessellation.
//! Clamp minimums, the cone's fixed height, and default tessellation
//! parameters live here so the generators never carry literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_subdivisions, MIN_CONE_DISC};
//!
//! // Sub-minimum counts are raised, never rejected
//! assert_eq!(clamp_subdivisions(1, MIN_CONE_DISC), 3);
//! assert_eq!(clamp_subdivisions(12, MIN_CONE_DISC), 12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Clamp, Don't Reject**: Helpers normalize input instead of failing

pub mod constants;
