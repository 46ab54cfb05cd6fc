//! 편집 거리 기반 문자열 유사도

/// 두 문자열 간 Levenshtein 편집 거리
///
/// UTF-16 코드 유닛 단위, 치환/삽입/삭제 비용은 모두 1.
/// BMP 밖 문자(이모지 등)는 두 유닛으로 센다.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // 이전 행/현재 행만 유지하는 DP
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                let substitution = prev[j] + 1;
                let insertion = curr[j] + 1;
                let deletion = prev[j + 1] + 1;
                substitution.min(insertion).min(deletion)
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// 정규화된 유사도 (0.0 ~ 1.0)
///
/// `(긴 문자열 길이 - 편집 거리) / 긴 문자열 길이`, 길이는 UTF-16 코드 유닛 수.
/// 두 문자열이 모두 비어 있으면 1.0.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let longer = a.encode_utf16().count().max(b.encode_utf16().count());
    if longer == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (longer - distance) as f64 / longer as f64
}
