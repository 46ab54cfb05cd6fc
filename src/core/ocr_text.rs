//! OCR 인식 결과 후처리 및 초성 키 추출

use serde::Serialize;

use crate::core::normalizer::normalize;
use crate::core::unicode::{is_compat_consonant, is_hangul_syllable};

/// 자주 잘못 인식되는 문자 보정 테이블
const OCR_CORRECTIONS: [(char, char); 5] = [
    ('0', 'ㅇ'),
    ('O', 'ㅇ'),
    ('l', 'ㅣ'),
    ('I', 'ㅣ'),
    ('1', 'ㄱ'),
];

fn correction_for(c: char) -> Option<char> {
    OCR_CORRECTIONS
        .iter()
        .find(|(wrong, _)| *wrong == c)
        .map(|(_, right)| *right)
}

/// OCR 텍스트 후처리
///
/// 1. 공백 제거
/// 2. 자음 자모, 완성형 한글, 숫자, 보정 대상 문자 외에는 제거
/// 3. 오인식 문자 보정 (0/O -> ㅇ, l/I -> ㅣ, 1 -> ㄱ)
pub fn postprocess_ocr(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .filter(|&c| {
            is_compat_consonant(c)
                || is_hangul_syllable(c)
                || c.is_ascii_digit()
                || correction_for(c).is_some()
        })
        .map(|c| correction_for(c).unwrap_or(c))
        .collect()
}

/// 인식된 텍스트와 추출된 초성 키
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyExtraction {
    /// 원본 인식 텍스트
    pub text: String,
    /// 초성 키
    pub key: String,
}

/// 인식된 텍스트에서 초성 키 추출
pub fn extract_key(text: &str) -> KeyExtraction {
    let key = normalize(text);
    log::debug!("초성 추출: {:?} -> {:?}", text, key);
    KeyExtraction {
        text: text.to_string(),
        key,
    }
}

/// 오인식 보정을 거친 뒤 초성 키 추출
///
/// `text` 필드에는 보정 전 원본이 남는다.
pub fn extract_key_with_corrections(text: &str) -> KeyExtraction {
    let cleaned = postprocess_ocr(text);
    let key = normalize(&cleaned);
    log::debug!("초성 추출(보정): {:?} -> {:?} -> {:?}", text, cleaned, key);
    KeyExtraction {
        text: text.to_string(),
        key,
    }
}
