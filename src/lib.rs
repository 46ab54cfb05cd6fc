pub mod config;
pub mod core;
pub mod search;

pub use crate::core::normalizer::normalize;
pub use crate::core::ocr_text::{
    extract_key, extract_key_with_corrections, postprocess_ocr, KeyExtraction,
};
pub use crate::search::{load_dataset, Dataset, MatchEngine, MatchTier};
