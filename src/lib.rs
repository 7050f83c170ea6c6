//! ZenPosture 자세 점수 라이브러리
//!
//! 포즈 랜드마크 좌표에서 7개의 기하 특징을 추출하고, 작은 회귀 신경망으로
//! 자세 점수를 학습한 뒤 TensorFlow.js layers-model 형식으로 내보낸다.

pub mod core;
pub mod pipeline;
pub mod cli;

// 핵심 모듈들 재수출
pub use core::{
    // 특징 추출
    extract_features, FeatureVector, LandmarkRow, Point2, FEATURE_COUNT, FEATURE_NAMES,
    REQUIRED_COLUMNS,
    // 데이터셋
    read_landmark_csv, train_test_split, Dataset, DatasetReport, DatasetSplit, DatasetSummary,
    PostureBand, Sample,
    // 모델 및 학습
    PostureMlp, PostureTrainer, RegressionMetrics, TrainConfig, TrainOutcome,
    // 내보내기
    export_layers_model, ExportConfig, ExportSummary,
};
