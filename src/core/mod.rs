pub mod batch;
pub mod converter;
pub mod output;
pub mod padding;
pub mod tables;

pub use crate::domain::model::{BatchSummary, ConversionRecord, Group, Magnitude};
pub use crate::domain::ports::NumberSpeller;
pub use crate::utils::error::Result;
