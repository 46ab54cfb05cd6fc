//! 단계별 정답 검색 엔진
//!
//! 정확 일치 -> 부분 일치 -> 유사도 순으로 검색하며,
//! 결과가 하나라도 나온 첫 단계에서 멈춥니다.

use serde::Serialize;

use crate::core::normalizer::normalize;

use super::config::SearchConfig;
use super::dataset::{Dataset, Record};
use super::similarity::normalized_similarity;

/// 결과를 만든 검색 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Partial,
    Similarity,
    /// 모든 단계에서 결과 없음
    None,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchTier::Exact => "정확 일치",
            MatchTier::Partial => "부분 일치",
            MatchTier::Similarity => "유사도",
            MatchTier::None => "결과 없음",
        };
        f.write_str(name)
    }
}

/// 검색 결과 한 건
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    pub record: &'a Record,
    /// 유사도 단계에서만 채워짐
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl<'a> SearchResult<'a> {
    fn matched(record: &'a Record) -> Self {
        Self {
            record,
            similarity: None,
        }
    }
}

/// 단계별 검색 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<'a> {
    pub tier: MatchTier,
    pub results: Vec<SearchResult<'a>>,
}

impl Resolution<'_> {
    fn none() -> Self {
        Self {
            tier: MatchTier::None,
            results: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

type TierFn = for<'a> fn(&'a MatchEngine, &str) -> Vec<SearchResult<'a>>;

/// 실행 순서대로 나열한 검색 단계
const CASCADE: [(MatchTier, TierFn); 3] = [
    (MatchTier::Exact, MatchEngine::search_exact),
    (MatchTier::Partial, MatchEngine::search_partial),
    (MatchTier::Similarity, MatchEngine::search_cascade_similarity),
];

/// 정답 검색 엔진
///
/// 데이터셋은 생성 시 한 번 주입되고 이후 읽기 전용이다.
/// 교체는 `reload`로 통째로만 가능하다.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    dataset: Dataset,
    config: SearchConfig,
}

impl MatchEngine {
    /// 기본 설정으로 엔진 생성
    pub fn new(dataset: Dataset) -> Self {
        Self::with_config(dataset, SearchConfig::default())
    }

    /// 설정을 지정하여 엔진 생성
    pub fn with_config(dataset: Dataset, config: SearchConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 데이터셋 전체 교체
    pub fn reload(&mut self, dataset: Dataset) {
        log::info!(
            "데이터셋 교체: {}개 -> {}개 항목",
            self.dataset.len(),
            dataset.len()
        );
        self.dataset = dataset;
    }

    /// 초성 키로 단계별 검색
    ///
    /// 빈 쿼리는 `MatchTier::None`과 빈 결과를 반환한다.
    pub fn resolve(&self, query: &str) -> Resolution<'_> {
        let query = query.trim();
        if query.is_empty() {
            return Resolution::none();
        }

        for (tier, search) in CASCADE {
            let results = search(self, query);
            log::debug!("{:?} 검색 {:?}: {}개", tier, query, results.len());
            if !results.is_empty() {
                return Resolution { tier, results };
            }
        }

        log::warn!("검색 결과 없음: {:?}", query);
        Resolution::none()
    }

    /// 원시 텍스트(OCR 결과 등)를 초성 키로 바꾼 뒤 단계별 검색
    pub fn resolve_text(&self, raw: &str) -> Resolution<'_> {
        self.resolve(&normalize(raw))
    }

    /// 키가 쿼리와 정확히 같은 레코드 (원본 순서)
    pub fn search_exact(&self, query: &str) -> Vec<SearchResult<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        self.dataset
            .iter()
            .filter(|record| record.key == query)
            .map(SearchResult::matched)
            .collect()
    }

    /// 키가 쿼리를 포함하거나 쿼리가 키를 포함하는 레코드 (원본 순서)
    pub fn search_partial(&self, query: &str) -> Vec<SearchResult<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        self.dataset
            .iter()
            .filter(|record| record.key.contains(query) || query.contains(record.key.as_str()))
            .map(SearchResult::matched)
            .collect()
    }

    /// 유사도가 `threshold` 이상인 레코드 (유사도 내림차순, 동률은 원본 순서)
    pub fn search_by_similarity(&self, query: &str, threshold: f64) -> Vec<SearchResult<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult<'_>> = self
            .dataset
            .iter()
            .filter_map(|record| {
                let similarity = normalized_similarity(query, &record.key);
                (similarity >= threshold).then_some(SearchResult {
                    record,
                    similarity: Some(similarity),
                })
            })
            .collect();

        // sort_by는 안정 정렬
        results.sort_by(|a, b| {
            let a = a.similarity.unwrap_or(0.0);
            let b = b.similarity.unwrap_or(0.0);
            b.total_cmp(&a)
        });

        results
    }

    /// 설정된 기본 임계값으로 유사도 검색
    pub fn search_fuzzy(&self, query: &str) -> Vec<SearchResult<'_>> {
        self.search_by_similarity(query, self.config.fuzzy_threshold)
    }

    fn search_cascade_similarity(&self, query: &str) -> Vec<SearchResult<'_>> {
        self.search_by_similarity(query, self.config.cascade_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::dataset::load_dataset;

    fn engine(raw: &str) -> MatchEngine {
        MatchEngine::new(load_dataset(raw))
    }

    fn values<'a>(results: &[SearchResult<'a>]) -> Vec<&'a str> {
        results.iter().map(|r| r.record.value.as_str()).collect()
    }

    #[test]
    fn test_empty_query() {
        let engine = engine("ㄱ,가");
        let resolution = engine.resolve("");
        assert_eq!(resolution.tier, MatchTier::None);
        assert!(resolution.is_empty());

        assert_eq!(engine.resolve("  \t ").tier, MatchTier::None);
    }

    #[test]
    fn test_exact_tier() {
        let engine = engine("ㅅㄱ,사과\nㅅㄱㄴㅁ,사과나무\nㅅㄱ,시계");
        let resolution = engine.resolve("ㅅㄱ");

        assert_eq!(resolution.tier, MatchTier::Exact);
        assert_eq!(values(&resolution.results), vec!["사과", "시계"]);
        assert!(resolution.results.iter().all(|r| r.record.key == "ㅅㄱ"));
        assert!(resolution.results.iter().all(|r| r.similarity.is_none()));
    }

    #[test]
    fn test_exact_query_trimmed() {
        let engine = engine("ㅅㄱ,사과");
        assert_eq!(engine.resolve("  ㅅㄱ ").tier, MatchTier::Exact);
    }

    #[test]
    fn test_exact_short_circuits_partial() {
        let engine = engine("ㄱㄴㄷㄹ,가나다라\nㄱㄴ,가나");
        let resolution = engine.resolve("ㄱㄴ");

        assert_eq!(resolution.tier, MatchTier::Exact);
        assert_eq!(values(&resolution.results), vec!["가나"]);
    }

    #[test]
    fn test_partial_tier_bidirectional() {
        let engine = engine("ㄱㄴㄷㄹ,가나다라\nㄴ,나\nㅁㅂ,마바");

        // 쿼리가 키에 포함 + 키가 쿼리에 포함
        let resolution = engine.resolve("ㄴㄷ");
        assert_eq!(resolution.tier, MatchTier::Partial);
        assert_eq!(values(&resolution.results), vec!["가나다라", "나"]);
    }

    #[test]
    fn test_partial_tier_longer_query() {
        let engine = engine("ㅎㄱ,한국\nㅁㄱ,미국");
        // OCR이 앞뒤로 여분 글자를 읽은 경우
        let resolution = engine.resolve("ㅇㅎㄱㅇ");
        assert_eq!(resolution.tier, MatchTier::Partial);
        assert_eq!(values(&resolution.results), vec!["한국"]);
    }

    #[test]
    fn test_partial_short_circuits_similarity() {
        let engine = engine("ㄱㄴ,A\nㄱㄴㄷㅁ,B");

        // B는 유사도 0.75이지만 부분 일치 단계에서 멈춤
        let fuzzy = engine.search_by_similarity("ㄱㄴㄷㄹ", 0.6);
        assert_eq!(values(&fuzzy), vec!["B"]);
        assert!((fuzzy[0].similarity.unwrap() - 0.75).abs() < 1e-9);

        let resolution = engine.resolve("ㄱㄴㄷㄹ");
        assert_eq!(resolution.tier, MatchTier::Partial);
        assert_eq!(values(&resolution.results), vec!["A"]);
        assert!(resolution.results[0].similarity.is_none());
    }

    #[test]
    fn test_non_bmp_key_scored_in_utf16_units() {
        // "ㅎㄱ😀"는 4 유닛, 유사도 0.5로 임계값 미달
        let engine = engine("ㅎㄱ😀,이모지");
        let resolution = engine.resolve("ㅎㄱㅇ");
        assert_eq!(resolution.tier, MatchTier::None);
        assert!(resolution.is_empty());
    }

    #[test]
    fn test_similarity_tier() {
        let engine = engine("ㄱㄴㄷㄹㅁ,첫째\nㅂㅅㅇㅈㅊ,둘째\nㄱㄴㅇㄹㅁ,셋째");
        let resolution = engine.resolve("ㄱㄴㄷㄹㅊ");

        assert_eq!(resolution.tier, MatchTier::Similarity);
        assert_eq!(values(&resolution.results), vec!["첫째", "셋째"]);
        let scores: Vec<f64> = resolution
            .results
            .iter()
            .map(|r| r.similarity.unwrap())
            .collect();
        assert!((scores[0] - 0.8).abs() < 1e-9);
        assert!((scores[1] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_tier_sorted_and_thresholded() {
        let engine = engine(
            "ㄱㄴㅇㄹㅁ,a\nㄱㄴㄷㄹㅁ,b\nㅋㅌㅍㅎㅊ,c\nㄱㄴㄷㄹㅂ,d\nㄱㅇㅇㄹㅁ,e",
        );
        let resolution = engine.resolve("ㄱㄴㄷㄹㅊ");
        assert_eq!(resolution.tier, MatchTier::Similarity);

        let scores: Vec<f64> = resolution
            .results
            .iter()
            .map(|r| r.similarity.unwrap())
            .collect();
        assert!(scores.iter().all(|&s| s >= 0.6));
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        // "c", "e"는 임계값 미달
        assert!(!values(&resolution.results).contains(&"c"));
        assert!(!values(&resolution.results).contains(&"e"));
    }

    #[test]
    fn test_similarity_ties_keep_dataset_order() {
        let engine = engine("ㄱㄴㄷㄹㅂ,첫째\nㄱㄴㄷㄹㅅ,둘째\nㄱㄴㄷㄹㅇ,셋째");
        let results = engine.search_by_similarity("ㄱㄴㄷㄹㅁ", 0.6);
        assert_eq!(values(&results), vec!["첫째", "둘째", "셋째"]);
    }

    #[test]
    fn test_no_match() {
        let engine = engine("ㄱㄴㄷ,가나다");
        let resolution = engine.resolve("ㅋㅌㅍㅎ");
        assert_eq!(resolution.tier, MatchTier::None);
        assert!(resolution.results.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let engine = MatchEngine::default();
        assert_eq!(engine.resolve("ㄱ").tier, MatchTier::None);
    }

    #[test]
    fn test_search_by_similarity_threshold() {
        let engine = engine("ㄱㄴㄷㄹㅁ,a\nㄱㄴㄷㄹㅂ,b\nㄱㄴㅇㅈㅂ,c");
        assert_eq!(values(&engine.search_by_similarity("ㄱㄴㄷㄹㅁ", 0.7)), vec!["a", "b"]);
        assert_eq!(engine.search_by_similarity("ㄱㄴㄷㄹㅁ", 0.9).len(), 1);
        assert!(engine.search_by_similarity("", 0.0).is_empty());
    }

    #[test]
    fn test_search_fuzzy_uses_config_threshold() {
        let dataset = load_dataset("ㄱㄴㄷㄹㅁ,a\nㄱㄴㄷㅇㅈ,b");
        let engine = MatchEngine::new(dataset.clone());
        // b는 0.6
        assert_eq!(values(&engine.search_fuzzy("ㄱㄴㄷㄹㅁ")), vec!["a"]);

        let engine =
            MatchEngine::with_config(dataset, SearchConfig::new().with_fuzzy_threshold(0.5));
        assert_eq!(values(&engine.search_fuzzy("ㄱㄴㄷㄹㅁ")), vec!["a", "b"]);
    }

    #[test]
    fn test_cascade_threshold_configurable() {
        let dataset = load_dataset("ㄱㄴㄷㄹㅁ,a");
        let strict =
            MatchEngine::with_config(dataset, SearchConfig::new().with_cascade_threshold(0.9));
        assert_eq!(strict.resolve("ㄱㄴㄷㄹㅂ").tier, MatchTier::None);
    }

    #[test]
    fn test_resolve_text() {
        let engine = engine("ㅅㄱㄴㅁ,사과나무");
        let resolution = engine.resolve_text("사과 나무!");
        assert_eq!(resolution.tier, MatchTier::Exact);
        assert_eq!(values(&resolution.results), vec!["사과나무"]);

        assert_eq!(engine.resolve_text("apple").tier, MatchTier::None);
    }

    #[test]
    fn test_reload_replaces_dataset() {
        let mut engine = engine("ㄱ,가");
        assert_eq!(engine.resolve("ㄱ").tier, MatchTier::Exact);

        engine.reload(load_dataset("ㄴ,나"));
        assert_eq!(engine.dataset().len(), 1);
        assert_eq!(values(&engine.resolve("ㄴ").results), vec!["나"]);
        assert_eq!(engine.search_exact("ㄱ").len(), 0);
    }

    #[test]
    fn test_concurrent_readers() {
        let engine = engine("ㅅㄱ,사과\nㅂㄴㄴ,바나나");
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(engine.resolve("ㅅㄱ").tier, MatchTier::Exact);
                    assert_eq!(engine.resolve("ㅂㄴ").tier, MatchTier::Partial);
                });
            }
        });
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(MatchTier::Exact.to_string(), "정확 일치");
        assert_eq!(MatchTier::None.to_string(), "결과 없음");
    }
}
