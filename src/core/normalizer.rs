//! 임의 문자열 -> 초성 키 변환기

use unicode_normalization::UnicodeNormalization;

use crate::core::unicode::{choseong_of, is_compat_consonant};

/// 문자열에서 초성 키 추출
///
/// NFC 정규화 후 완성형 한글은 초성으로, 호환용 자음 자모는 그대로 남기고
/// 그 밖의 문자(공백, 영문, 숫자, 모음 자모 등)는 모두 버린다.
pub fn normalize(input: &str) -> String {
    input
        .nfc()
        .filter_map(|c| {
            if let Some(cho) = choseong_of(c) {
                Some(cho)
            } else if is_compat_consonant(c) {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}
