//! arithmetic routines
//!
//! Pure functions over [`BigNat`] values. Dependency order is
//! addition, then subtraction (built from addition via the nines'
//! complement), then the multiplication strategies (built from
//! addition, subtraction and decimal shifts).

pub mod addition;
pub mod multiplication;
pub mod subtraction;

pub use addition::add;
pub use subtraction::subtract;
