pub mod calculator;
pub mod presenter;
pub mod session;

pub use crate::domain::model::{Advisory, SaltInputs, SaltResult};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
