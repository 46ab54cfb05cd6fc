//! 한글 초성 키 처리

pub mod normalizer;
pub mod ocr_text;
pub mod unicode;
