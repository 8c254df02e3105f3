//! Numeric core for two-circle Venn layouts: the closed-form overlap area of
//! two circles and the bounded bisection search that inverts it.

pub mod area;
pub mod solver;

pub use area::*;
pub use solver::*;
