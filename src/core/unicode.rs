//! 유니코드 한글 음절/자모 판별 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;
/// 같은 초성을 공유하는 음절 수 (21 × 28 = 588)
const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 호환용 자음 자모 영역: ㄱ(U+3131) ~ ㅎ(U+314E)
/// 겹자음(ㄲ, ㄳ, ㄵ ...)을 포함한 30개 코드포인트
const COMPAT_CONSONANT_FIRST: u32 = 0x3131;
const COMPAT_CONSONANT_LAST: u32 = 0x314E;

/// 초성 인덱스 순서(유니코드 초성 배열 순서)의 호환용 자모
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 문자가 호환용 자음 자모(ㄱ-ㅎ)인지 확인
pub fn is_compat_consonant(c: char) -> bool {
    (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&(c as u32))
}

/// 완성형 한글의 초성 인덱스 (0~18)
///
/// `(코드포인트 - 0xAC00) / 588`
pub fn choseong_index(c: char) -> Option<u32> {
    if !is_hangul_syllable(c) {
        return None;
    }
    Some((c as u32 - HANGUL_SYLLABLE_BASE) / SYLLABLES_PER_CHOSEONG)
}

/// 초성 인덱스에 해당하는 자모 문자 반환 (호환용 자모)
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 완성형 한글의 초성을 호환용 자모로 반환
pub fn choseong_of(c: char) -> Option<char> {
    choseong_index(c).and_then(choseong_to_jamo_char)
}
