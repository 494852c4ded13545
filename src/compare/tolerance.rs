//! Named tolerance thresholds for comparison decisions.
//!
//! The same constants serve as difference ceilings for `same_as` and as
//! correlation floors for `part_of`.

/// Default threshold for `same_as` and `part_of`.
pub const PERFECT: f64 = 0.09;

pub const GOOD: f64 = 0.05;

pub const BAD: f64 = 0.15;

pub const TERRIBLE: f64 = 0.3;
