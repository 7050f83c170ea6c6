//! 실행 파일 공통 인자
//!
//! 모든 인자는 생략 가능하고, 생략하면 고정 기본 경로와 기본 구성을 쓴다.

use crate::core::{ExportConfig, TrainConfig};
use crate::pipeline::{PipelinePaths, DEFAULT_DATA_PATH, DEFAULT_EXPORT_DIR, DEFAULT_MODEL_PATH};
use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use std::path::PathBuf;

pub fn data_arg() -> Arg {
    Arg::new("data")
        .long("data")
        .short('d')
        .value_name("CSV")
        .help("랜드마크 CSV 경로")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_DATA_PATH)
}

pub fn model_arg() -> Arg {
    Arg::new("model")
        .long("model")
        .short('m')
        .value_name("FILE")
        .help("모델 파일 경로 (safetensors)")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_MODEL_PATH)
}

pub fn export_dir_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .value_name("DIR")
        .help("TF.js 모델 출력 디렉토리")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_EXPORT_DIR)
}

pub fn shard_bytes_arg() -> Arg {
    Arg::new("shard-bytes")
        .long("shard-bytes")
        .value_name("BYTES")
        .help("샤드 최대 크기 (기본 4 MiB)")
        .value_parser(value_parser!(usize))
}

/// 학습 구성 관련 인자들
pub fn train_args() -> Vec<Arg> {
    vec![
        Arg::new("config")
            .long("config")
            .short('c')
            .value_name("JSON")
            .help("학습 구성 JSON 파일")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("epochs")
            .long("epochs")
            .value_name("N")
            .help("에포크 수")
            .value_parser(value_parser!(usize)),
        Arg::new("batch-size")
            .long("batch-size")
            .value_name("N")
            .help("배치 크기")
            .value_parser(value_parser!(usize)),
        Arg::new("learning-rate")
            .long("learning-rate")
            .value_name("LR")
            .help("학습률")
            .value_parser(value_parser!(f64)),
        Arg::new("test-ratio")
            .long("test-ratio")
            .value_name("RATIO")
            .help("검증 비율 (0.0-1.0)")
            .value_parser(value_parser!(f64)),
        Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .help("분할/초기화 시드")
            .value_parser(value_parser!(u64)),
        Arg::new("no-progress")
            .long("no-progress")
            .help("진행률 표시줄 끄기")
            .action(ArgAction::SetTrue),
    ]
}

fn path_or(matches: &ArgMatches, id: &str, default: &str) -> PathBuf {
    matches
        .get_one::<PathBuf>(id)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(default))
}

pub fn data_path(matches: &ArgMatches) -> PathBuf {
    path_or(matches, "data", DEFAULT_DATA_PATH)
}

pub fn model_path(matches: &ArgMatches) -> PathBuf {
    path_or(matches, "model", DEFAULT_MODEL_PATH)
}

pub fn export_dir(matches: &ArgMatches) -> PathBuf {
    path_or(matches, "output", DEFAULT_EXPORT_DIR)
}

pub fn pipeline_paths(matches: &ArgMatches) -> PipelinePaths {
    PipelinePaths {
        data: data_path(matches),
        model: model_path(matches),
        export_dir: export_dir(matches),
    }
}

/// 구성 파일 → 명령줄 덮어쓰기 순서로 학습 구성 결정
pub fn train_config(matches: &ArgMatches) -> Result<TrainConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => TrainConfig::from_json_file(path)?,
        None => TrainConfig::default(),
    };

    if let Some(&epochs) = matches.get_one::<usize>("epochs") {
        config = config.with_epochs(epochs);
    }
    if let Some(&batch_size) = matches.get_one::<usize>("batch-size") {
        config = config.with_batch_size(batch_size);
    }
    if let Some(&lr) = matches.get_one::<f64>("learning-rate") {
        config = config.with_learning_rate(lr);
    }
    if let Some(&ratio) = matches.get_one::<f64>("test-ratio") {
        config = config.with_test_ratio(ratio);
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    if matches.get_flag("no-progress") {
        config = config.with_progress(false);
    }

    log::debug!("학습 구성: {:?}", config);
    Ok(config)
}

pub fn export_config(matches: &ArgMatches) -> ExportConfig {
    match matches.get_one::<usize>("shard-bytes") {
        Some(&bytes) => ExportConfig::default().with_shard_bytes(bytes),
        None => ExportConfig::default(),
    }
}
