//! Image comparison: the difference metric, tolerance decisions, and
//! sub-image localization.

pub mod diff;
pub mod locate;
pub mod tolerance;

#[cfg(test)]
mod tests;

pub use diff::{difference, same_as, same_as_within};
pub use locate::{Match, part_of, part_of_within};
