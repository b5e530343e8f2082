pub mod decoder;
pub mod fallback;
pub mod normalize;
pub mod remote;
pub mod selection;
pub mod service;

pub use crate::domain::model::{FortunePrompt, FortuneRequest, FortuneResult, FortuneText};
pub use crate::domain::ports::FortuneGenerator;
pub use crate::utils::error::Result;
