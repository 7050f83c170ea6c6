//! # 자세 점수 핵심 모듈
//!
//! 특징 추출 → 데이터셋 구성 → 학습 → 내보내기 순서로 이어지는 구성 요소들

pub mod features;
pub mod dataset;
pub mod model;
pub mod optimizers;
pub mod training;
pub mod export;

// 주요 타입들 재수출
pub use features::*;
pub use dataset::*;
pub use model::*;
// optimizers 와 training 은 둘 다 `config` 모듈을 가지므로 타입만 재수출
pub use optimizers::{AdamConfig, OptimizerConfig};
pub use training::{EpochLog, PostureTrainer, RegressionMetrics, TrainConfig, TrainOutcome};
pub use export::*;
