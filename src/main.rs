//! chosung - 초성 퀴즈 정답 검색기

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use chosung::config::{load_config, load_config_from, AppConfig};
use chosung::search::{Dataset, MatchEngine, MatchTier, Resolution, SearchResult};
use chosung::{extract_key, extract_key_with_corrections, KeyExtraction};

#[derive(Parser, Debug)]
#[command(name = "chosung", version, about = "초성 키로 퀴즈 정답 검색")]
struct Cli {
    /// 퀴즈 데이터셋 (초성,정답 CSV). 생략 시 설정 파일의 경로 사용
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// 설정 파일 경로
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 쿼리를 OCR 원문으로 보고 초성 키를 추출한 뒤 검색
    #[arg(short, long)]
    raw: bool,

    /// 단계별 검색 대신 유사도 검색만 수행
    #[arg(short, long)]
    fuzzy: bool,

    /// 유사도 검색 임계값 (--fuzzy와 함께 사용)
    #[arg(short, long, requires = "fuzzy")]
    threshold: Option<f64>,

    /// JSON으로 출력
    #[arg(long)]
    json: bool,

    /// 검색어 (생략 시 표준 입력에서 한 줄씩 읽음)
    queries: Vec<String>,
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    let dataset_path = cli.dataset.clone().or_else(|| config.dataset_path.clone());
    let Some(dataset_path) = dataset_path else {
        eprintln!("데이터셋 경로가 필요합니다 (--dataset 또는 설정 파일의 dataset_path)");
        return ExitCode::FAILURE;
    };

    let dataset = match Dataset::load(&dataset_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("데이터셋 로드 실패 ({}): {}", dataset_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let engine = MatchEngine::with_config(dataset, config.search_config());

    let mut stdout = io::stdout().lock();
    if cli.queries.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("표준 입력 읽기 실패: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            if let Err(e) = run_query(&engine, &cli, &config, &line, &mut stdout) {
                log::error!("출력 실패: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for query in &cli.queries {
            if let Err(e) = run_query(&engine, &cli, &config, query, &mut stdout) {
                log::error!("출력 실패: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// 쿼리 한 건 검색 후 출력
fn run_query(
    engine: &MatchEngine,
    cli: &Cli,
    config: &AppConfig,
    query: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let extraction = cli.raw.then(|| {
        if config.ocr_corrections {
            extract_key_with_corrections(query)
        } else {
            extract_key(query)
        }
    });
    let key = match &extraction {
        Some(extraction) => extraction.key.clone(),
        None => query.trim().to_string(),
    };

    let resolution = if cli.fuzzy {
        let threshold = cli.threshold.unwrap_or(engine.config().fuzzy_threshold);
        let results = engine.search_by_similarity(&key, threshold);
        let tier = if results.is_empty() {
            MatchTier::None
        } else {
            MatchTier::Similarity
        };
        Resolution { tier, results }
    } else {
        engine.resolve(&key)
    };

    if cli.json {
        let output = QueryOutput {
            extraction,
            resolution,
        };
        let json = serde_json::to_string(&output).map_err(io::Error::other)?;
        return writeln!(out, "{}", json);
    }

    writeln!(out, "[{}] {} ({}개)", key, resolution.tier, resolution.results.len())?;
    for result in &resolution.results {
        writeln!(out, "  {}", format_result(result))?;
    }
    Ok(())
}

/// `--json` 출력 한 줄: `--raw`일 때만 추출 결과 포함
#[derive(Serialize)]
struct QueryOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    extraction: Option<KeyExtraction>,
    #[serde(flatten)]
    resolution: Resolution<'a>,
}

fn format_result(result: &SearchResult<'_>) -> String {
    match result.similarity {
        Some(similarity) => format!(
            "{} → {} ({:.0}%)",
            result.record.key,
            result.record.value,
            similarity * 100.0
        ),
        None => format!("{} → {}", result.record.key, result.record.value),
    }
}
