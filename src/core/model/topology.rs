//! 모델 구조 정의

use crate::core::features::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// 은닉층 너비
pub const HIDDEN_UNITS: usize = 16;

/// 활성화 함수 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Linear,
}

/// Dense 레이어 하나의 명세
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseSpec {
    /// Keras 기본 이름 규칙 (`dense`, `dense_1`, ...)
    pub name: &'static str,
    pub in_dim: usize,
    pub out_dim: usize,
    pub activation: Activation,
}

impl DenseSpec {
    /// 체크포인트 안의 가중치 키 (`[out, in]`)
    pub fn weight_key(&self) -> String {
        format!("{}.weight", self.name)
    }

    /// 체크포인트 안의 편향 키 (`[out]`)
    pub fn bias_key(&self) -> String {
        format!("{}.bias", self.name)
    }

    pub fn param_count(&self) -> usize {
        self.in_dim * self.out_dim + self.out_dim
    }
}

/// 7 → 16 (relu) → 16 (relu) → 1 (linear)
pub const POSTURE_TOPOLOGY: [DenseSpec; 3] = [
    DenseSpec {
        name: "dense",
        in_dim: FEATURE_COUNT,
        out_dim: HIDDEN_UNITS,
        activation: Activation::Relu,
    },
    DenseSpec {
        name: "dense_1",
        in_dim: HIDDEN_UNITS,
        out_dim: HIDDEN_UNITS,
        activation: Activation::Relu,
    },
    DenseSpec {
        name: "dense_2",
        in_dim: HIDDEN_UNITS,
        out_dim: 1,
        activation: Activation::Linear,
    },
];

/// 전체 학습 파라미터 수
pub fn total_param_count() -> usize {
    POSTURE_TOPOLOGY.iter().map(DenseSpec::param_count).sum()
}
