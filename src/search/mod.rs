//! 초성 키 기반 정답 검색
//!
//! 퀴즈 데이터셋(`초성,정답` 줄 목록)에서 OCR로 읽은 초성 키에 맞는 정답을 찾습니다.
//!
//! # 개요
//!
//! 검색은 3단계로 진행되며, 결과가 나온 첫 단계에서 멈춥니다:
//!
//! 1. **정확 일치**: 키가 쿼리와 같은 항목
//! 2. **부분 일치**: 키가 쿼리를 포함하거나, 쿼리가 키를 포함하는 항목
//! 3. **유사도**: Levenshtein 유사도가 임계값(기본 0.6) 이상인 항목, 유사도 내림차순
//!
//! # 사용 예시
//!
//! ```
//! use chosung::search::{load_dataset, MatchEngine, MatchTier};
//!
//! let engine = MatchEngine::new(load_dataset("ㅅㄱ,사과\nㅂㄴㄴ,바나나"));
//!
//! let resolution = engine.resolve("ㅅㄱ");
//! assert_eq!(resolution.tier, MatchTier::Exact);
//! assert_eq!(resolution.results[0].record.value, "사과");
//!
//! // OCR 원문을 바로 넘길 수도 있음
//! let resolution = engine.resolve_text("바나나");
//! assert_eq!(resolution.tier, MatchTier::Exact);
//! ```

mod config;
mod dataset;
mod engine;
mod similarity;

// 공개 인터페이스
pub use config::SearchConfig;
pub use dataset::{load_dataset, Dataset, DatasetError, Record};
pub use engine::{MatchEngine, MatchTier, Resolution, SearchResult};
pub use similarity::{levenshtein_distance, normalized_similarity};
