//! (특징, 라벨) 샘플과 데이터셋 구성

use crate::core::features::{extract_features, FeatureVector, LandmarkRow, FEATURE_COUNT};
use std::fmt;

/// 학습 샘플 하나
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: FeatureVector,
    pub label: f64,
}

/// 데이터셋 구성 결과 집계. 제외된 행은 개별 보고하지 않고 개수만 센다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetReport {
    /// 입력 행 수
    pub total_rows: usize,
    /// 라벨이 숫자가 아니어서 제외된 행
    pub invalid_label: usize,
    /// 특징 중 NaN 이 있어 제외된 행
    pub incomplete_features: usize,
    /// 남은 샘플 수
    pub retained: usize,
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "행 {} 개 중 {} 개 사용 (라벨 오류 {}, 특징 누락 {})",
            self.total_rows, self.retained, self.invalid_label, self.incomplete_features
        )
    }
}

/// 필터링이 끝난 학습용 데이터셋
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub samples: Vec<Sample>,
}

impl Dataset {
    /// 랜드마크 행들로부터 데이터셋 구성
    ///
    /// 1. 라벨을 숫자로 변환하고 실패한 행 제외
    /// 2. 특징 추출 후 NaN 이 하나라도 있는 행 제외
    pub fn from_rows(rows: &[LandmarkRow]) -> (Self, DatasetReport) {
        let mut report = DatasetReport {
            total_rows: rows.len(),
            ..Default::default()
        };
        let mut samples = Vec::with_capacity(rows.len());

        for row in rows {
            let label = row.label_value();
            if label.is_nan() {
                report.invalid_label += 1;
                continue;
            }

            let features = extract_features(row);
            if !features.is_complete() {
                report.incomplete_features += 1;
                continue;
            }

            samples.push(Sample { features, label });
        }

        report.retained = samples.len();
        log::debug!("데이터셋 구성: {}", report);
        (Self { samples }, report)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 주어진 인덱스의 특징을 행 우선(row-major) f32 로 평탄화
    pub fn feature_matrix(&self, indices: &[usize]) -> Vec<f32> {
        let mut data = Vec::with_capacity(indices.len() * FEATURE_COUNT);
        for &idx in indices {
            data.extend_from_slice(&self.samples[idx].features.to_f32_array());
        }
        data
    }

    /// 주어진 인덱스의 라벨 (f32)
    pub fn labels(&self, indices: &[usize]) -> Vec<f32> {
        indices.iter().map(|&idx| self.samples[idx].label as f32).collect()
    }
}
