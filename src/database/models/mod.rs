pub mod department;
pub mod employee;
pub(crate) mod macros;
pub mod position;
pub mod salary_range;

// Re-export all models for easy importing
pub use department::*;
pub use employee::*;
pub use position::*;
pub use salary_range::*;
