//! 학습 구성

use crate::core::optimizers::OptimizerConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 학습 하이퍼파라미터. 기본값은 Keras 학습 스크립트 설정과 같다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// 옵티마이저 구성
    pub optimizer: OptimizerConfig,
    /// 에포크 수
    pub epochs: usize,
    /// 배치 크기
    pub batch_size: usize,
    /// 검증 비율
    pub test_ratio: f64,
    /// 분할/초기화/셔플 시드
    pub seed: u64,
    /// 에포크마다 학습 순서 섞기
    pub shuffle: bool,
    /// 진행률 표시줄 사용
    pub show_progress: bool,
    /// 학습에 필요한 최소 샘플 수
    pub min_samples: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            optimizer: OptimizerConfig::default(),
            epochs: 100,
            batch_size: 8,
            test_ratio: 0.2,
            seed: 42,
            shuffle: true,
            show_progress: true,
            min_samples: 5,
        }
    }
}

impl TrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 파일에서 구성 로드. 빠진 항목은 기본값
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("구성 파일을 열 수 없음: {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("구성 파일 파싱 실패: {}", path.display()))?;
        Ok(config)
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.optimizer = self.optimizer.with_learning_rate(lr);
        self
    }

    pub fn with_test_ratio(mut self, ratio: f64) -> Self {
        self.test_ratio = ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}
