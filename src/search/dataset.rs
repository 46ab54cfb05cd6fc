//! 퀴즈 데이터셋 로드
//!
//! `초성,정답` 형식의 줄 단위 텍스트를 파싱합니다.
//! 따옴표/이스케이프는 지원하지 않으며, 형식이 맞지 않는 줄은 조용히 버립니다.

use std::fs;
use std::path::Path;

use serde::Serialize;

/// 필드 구분자
const FIELD_SEPARATOR: char = ',';

/// 데이터셋 로드 에러
#[derive(Debug)]
pub enum DatasetError {
    /// 텍스트로 해석할 수 없는 입력 (UTF-8 아님)
    InvalidInput(String),
    /// 파일 읽기 실패
    Io(std::io::Error),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::InvalidInput(s) => write!(f, "잘못된 입력: {}", s),
            DatasetError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(e) => Some(e),
            DatasetError::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::Io(e)
    }
}

/// 데이터셋 한 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// 검색 키 (보통 초성 문자열)
    pub key: String,
    /// 정답 텍스트
    pub value: String,
    /// 원본에서의 위치 (빈 줄 제외, 1부터). 진단용이며 정렬에는 쓰지 않음
    pub ordinal: usize,
}

/// 로드 이후 변경되지 않는 레코드 목록
///
/// 레코드 순서는 원본 순서 그대로이며, 같은 순위의 검색 결과를 정렬하는 기준이 된다.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    /// 형식 오류로 버려진 (빈 줄이 아닌) 줄 수
    dropped: usize,
}

impl Dataset {
    /// UTF-8 바이트열에서 로드
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatasetError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| DatasetError::InvalidInput(e.to_string()))?;
        Ok(load_dataset(text))
    }

    /// 파일에서 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let bytes = fs::read(path.as_ref())?;
        let dataset = Self::from_bytes(&bytes)?;
        log::info!(
            "데이터셋 로드 완료: {} ({}개 항목)",
            path.as_ref().display(),
            dataset.len()
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 형식 오류로 버려진 줄 수
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// 앞뒤 공백과 BOM(U+FEFF) 제거
fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// 한 줄을 레코드로 파싱 (실패 시 None)
fn parse_line(line: &str, ordinal: usize) -> Option<Record> {
    let mut fields = line.split(FIELD_SEPARATOR).map(trim_field);
    let key = fields.next()?;
    let value = fields.next()?;

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some(Record {
        key: key.to_string(),
        value: value.to_string(),
        ordinal,
    })
}

/// 원시 텍스트에서 데이터셋 로드
///
/// - 각 줄을 trim(공백, BOM)하고 빈 줄은 무시
/// - 첫 두 필드가 `key`, `value`, 나머지 필드는 무시
/// - 필드가 2개 미만이거나 key/value가 비어 있는 줄은 버림
pub fn load_dataset(raw: &str) -> Dataset {
    let mut records = Vec::new();
    let mut dropped = 0;

    let lines = raw.lines().map(trim_field).filter(|line| !line.is_empty());
    for (index, line) in lines.enumerate() {
        match parse_line(line, index + 1) {
            Some(record) => records.push(record),
            None => {
                log::debug!("{}번째 줄 무시: {:?}", index + 1, line);
                dropped += 1;
            }
        }
    }

    log::info!("데이터셋 파싱 완료: {}개 항목, {}개 줄 무시", records.len(), dropped);

    Dataset { records, dropped }
}
