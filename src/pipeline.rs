//! 실행 파일들이 공유하는 단계별 진입점
//!
//! 각 단계는 파일 경로만 받아 읽고, 결과를 표준 출력에 보고한 뒤 값을 돌려준다.

use crate::core::{
    export_layers_model, load_posture_mlp, read_landmark_csv, read_model_weights, save_checkpoint,
    Dataset, DatasetReport, DatasetSummary, ExportConfig, ExportSummary, FeatureVector,
    PostureBand, PostureTrainer, TrainConfig, TrainOutcome,
};
use anyhow::Result;
use candle_core::Device;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "posture_data.csv";
pub const DEFAULT_MODEL_PATH: &str = "model.safetensors";
pub const DEFAULT_EXPORT_DIR: &str = "tfjs_posture_model";

/// 파이프라인 입출력 경로
#[derive(Debug, Clone, PartialEq)]
pub struct PipelinePaths {
    pub data: PathBuf,
    pub model: PathBuf,
    pub export_dir: PathBuf,
}

impl Default for PipelinePaths {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

/// CSV 를 읽어 데이터셋 구성
pub fn load_dataset<P: AsRef<Path>>(data_path: P) -> Result<(Dataset, DatasetReport)> {
    let rows = read_landmark_csv(data_path)?;
    let (dataset, report) = Dataset::from_rows(&rows);
    log::info!("{}", report);
    Ok((dataset, report))
}

/// 학습 후 검증 지표 출력, 모델 저장
pub fn run_train<P: AsRef<Path>, Q: AsRef<Path>>(
    data_path: P,
    model_path: Q,
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    let (dataset, _) = load_dataset(data_path)?;
    let outcome = PostureTrainer::new(config.clone()).fit(&dataset)?;

    for line in outcome.metrics.report_lines() {
        println!("{}", line);
    }

    let model_path = model_path.as_ref();
    save_checkpoint(&outcome.varmap, model_path)?;
    println!("Saved model to {}", model_path.display());
    Ok(outcome)
}

/// 저장된 모델을 TF.js layers-model 로 내보내기
pub fn run_export<P: AsRef<Path>, Q: AsRef<Path>>(
    model_path: P,
    out_dir: Q,
    config: &ExportConfig,
) -> Result<ExportSummary> {
    let weights = read_model_weights(model_path)?;
    let out_dir = out_dir.as_ref();
    let summary = export_layers_model(&weights, out_dir, config)?;
    println!("Exported to {}/", out_dir.display());
    Ok(summary)
}

/// 데이터 분포와 특징 통계 출력
pub fn run_inspect<P: AsRef<Path>>(data_path: P) -> Result<DatasetSummary> {
    let (dataset, report) = load_dataset(data_path)?;
    println!("Total rows: {}", report.total_rows);
    println!("Valid samples: {}", report.retained);
    let summary = DatasetSummary::from_dataset(&dataset);
    println!("{}", summary);
    Ok(summary)
}

/// 구간별 대표 샘플 예측 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPrediction {
    pub band: PostureBand,
    pub label: f64,
    pub features: FeatureVector,
    pub score: f32,
}

/// 각 구간의 첫 샘플을 저장된 모델로 채점
///
/// 데이터에 없는 구간은 건너뛴다.
pub fn run_test_model<P: AsRef<Path>, Q: AsRef<Path>>(
    data_path: P,
    model_path: Q,
) -> Result<Vec<BandPrediction>> {
    let device = Device::Cpu;
    let (_varmap, model) = load_posture_mlp(model_path, &device)?;
    let (dataset, _) = load_dataset(data_path)?;

    let picked: Vec<(PostureBand, f64, FeatureVector)> = PostureBand::ALL
        .iter()
        .filter_map(|&band| {
            dataset
                .samples
                .iter()
                .find(|s| PostureBand::from_label(s.label) == band)
                .map(|s| (band, s.label, s.features))
        })
        .collect();

    let features: Vec<FeatureVector> = picked.iter().map(|(_, _, f)| *f).collect();
    let scores = if features.is_empty() {
        Vec::new()
    } else {
        model.predict(&features, &device)?
    };

    let mut results = Vec::with_capacity(picked.len());
    for ((band, label, features), score) in picked.into_iter().zip(scores) {
        println!("\n{} (label {:.0})", band.describe(), label);
        for (name, value) in features.named() {
            println!("  {:<22} {:.4}", name, value);
        }
        println!("  Predicted score: {:.2}", score);
        results.push(BandPrediction {
            band,
            label,
            features,
            score,
        });
    }

    if results.is_empty() {
        log::warn!("채점할 샘플이 없음");
    }
    Ok(results)
}

/// inspect → train → export → test 전체 실행
pub fn run_all(paths: &PipelinePaths, train: &TrainConfig, export: &ExportConfig) -> Result<()> {
    println!("=== Inspect ===");
    run_inspect(&paths.data)?;

    println!("\n=== Train ===");
    run_train(&paths.data, &paths.model, train)?;

    println!("\n=== Export ===");
    run_export(&paths.model, &paths.export_dir, export)?;

    println!("\n=== Test ===");
    run_test_model(&paths.data, &paths.model)?;
    Ok(())
}
