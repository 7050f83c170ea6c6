use candle_nn::ParamsAdamW;
use serde::{Deserialize, Serialize};

/// Optimizer 전체 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Adam 구성
    pub adam: AdamConfig,
    /// 학습률 (고정)
    pub learning_rate: f64,
    /// 가중치 감소 (0 이면 순수 Adam)
    pub weight_decay: f64,
}

/// Adam 옵티마이저 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdamConfig {
    /// 베타1 파라미터 (1차 모멘트 지수 감소율)
    pub beta1: f64,
    /// 베타2 파라미터 (2차 모멘트 지수 감소율)
    pub beta2: f64,
    /// 엡실론 (수치 안정성을 위한 작은 값)
    pub epsilon: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            adam: AdamConfig::default(),
            learning_rate: 0.001,
            weight_decay: 0.0,
        }
    }
}

impl Default for AdamConfig {
    fn default() -> Self {
        // Keras Adam 기본값
        Self {
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-7,
        }
    }
}

impl OptimizerConfig {
    /// 새 구성 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// Adam 구성 설정
    pub fn with_adam_config(mut self, config: AdamConfig) -> Self {
        self.adam = config;
        self
    }

    /// 학습률 설정
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// 가중치 감소 설정
    pub fn with_weight_decay(mut self, decay: f64) -> Self {
        self.weight_decay = decay;
        self
    }

    /// candle AdamW 파라미터로 변환
    pub fn to_adamw_params(&self) -> ParamsAdamW {
        ParamsAdamW {
            lr: self.learning_rate,
            beta1: self.adam.beta1,
            beta2: self.adam.beta2,
            eps: self.adam.epsilon,
            weight_decay: self.weight_decay,
        }
    }
}
