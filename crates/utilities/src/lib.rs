//! Small stateless helpers: arithmetic and string utilities.

pub mod calculator;
pub mod error;
pub mod strings;

pub use calculator::Calculator;
pub use error::{UtilityError, UtilityResult};
