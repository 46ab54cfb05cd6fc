//! 검색 엔진 설정
//!
//! 유사도 단계에서 사용하는 임계값 정의

/// 검색 설정
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// 단계별 검색(`resolve`)의 유사도 단계 임계값
    pub cascade_threshold: f64,

    /// 유사도 단독 검색의 기본 임계값
    pub fuzzy_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cascade_threshold: 0.6,
            fuzzy_threshold: 0.7,
        }
    }
}

impl SearchConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 단계별 검색 임계값 설정
    pub fn with_cascade_threshold(mut self, threshold: f64) -> Self {
        self.cascade_threshold = threshold;
        self
    }

    /// 유사도 단독 검색 임계값 설정
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }
}
