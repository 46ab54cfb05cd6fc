//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::search::SearchConfig;

/// 앱 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// 퀴즈 데이터셋 경로 (CLI 인자로 덮어쓸 수 있음)
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    /// 단계별 검색의 유사도 임계값
    #[serde(default = "default_cascade_threshold")]
    pub cascade_threshold: f64,
    /// 유사도 단독 검색의 기본 임계값
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    /// OCR 오인식 보정 적용 여부
    #[serde(default = "default_ocr_corrections")]
    pub ocr_corrections: bool,
}

fn default_cascade_threshold() -> f64 {
    0.6
}

fn default_fuzzy_threshold() -> f64 {
    0.7
}

fn default_ocr_corrections() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            cascade_threshold: default_cascade_threshold(),
            fuzzy_threshold: default_fuzzy_threshold(),
            ocr_corrections: default_ocr_corrections(),
        }
    }
}

impl AppConfig {
    /// 검색 엔진 설정으로 변환
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new()
            .with_cascade_threshold(self.cascade_threshold)
            .with_fuzzy_threshold(self.fuzzy_threshold)
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/chosung/config.json (없으면 ~/.config)
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_absolute() && p.is_dir())
                .map(|home| home.join(".config"))
        })
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("chosung").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> AppConfig {
    load_config_from(config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    save_config_to(config, config_path())
}

/// 지정 경로에 설정 파일 저장
pub fn save_config_to(config: &AppConfig, path: impl AsRef<Path>) -> Result<(), String> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
