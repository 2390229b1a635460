use crate::utils::error::Result;

/// Anything that can spell a decimal digit string as words.
pub trait NumberSpeller: Send + Sync {
    fn spell(&self, digits: &str) -> Result<String>;
}
