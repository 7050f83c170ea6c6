//! 자세 점수 MLP 학습 루프

use super::config::TrainConfig;
use super::metrics::RegressionMetrics;
use crate::core::dataset::{train_test_split, Dataset, DatasetSplit};
use crate::core::features::FEATURE_COUNT;
use crate::core::model::PostureMlp;
use anyhow::{bail, Result};
use candle_core::{Device, Tensor};
use candle_nn::{AdamW, Module, Optimizer, VarMap};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 에포크별 손실 기록
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochLog {
    pub epoch: usize,
    pub train_loss: f64,
    pub val_loss: f64,
}

/// 학습 결과
pub struct TrainOutcome {
    /// 학습된 변수 (체크포인트 저장용)
    pub varmap: VarMap,
    pub model: PostureMlp,
    pub split: DatasetSplit,
    pub history: Vec<EpochLog>,
    /// 검증 세트 지표
    pub metrics: RegressionMetrics,
    /// 검증 세트 예측값 (`split.test_indices` 순서)
    pub predictions: Vec<f64>,
}

/// 고정 에포크 Adam 학습기
///
/// 수렴 여부는 확인하지 않는다. 에포크 예산을 다 쓰면 그 상태 그대로 끝난다.
pub struct PostureTrainer {
    config: TrainConfig,
    device: Device,
}

impl PostureTrainer {
    pub fn new(config: TrainConfig) -> Self {
        Self {
            config,
            device: Device::Cpu,
        }
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// 분할 → 학습 → 검증 평가
    pub fn fit(&self, dataset: &Dataset) -> Result<TrainOutcome> {
        let cfg = &self.config;
        if dataset.len() < cfg.min_samples {
            bail!(
                "학습 데이터 부족: {} 개 (최소 {} 개 필요)",
                dataset.len(),
                cfg.min_samples
            );
        }

        let split = train_test_split(dataset.len(), cfg.test_ratio, cfg.seed);
        if split.train_len() == 0 || split.test_len() == 0 {
            bail!(
                "학습/검증 분할이 비어 있음: train={} test={}",
                split.train_len(),
                split.test_len()
            );
        }
        log::info!("분할: 학습 {} / 검증 {}", split.train_len(), split.test_len());

        let train_x = self.inputs(dataset, &split.train_indices)?;
        let train_y = self.targets(dataset, &split.train_indices)?;
        let test_x = self.inputs(dataset, &split.test_indices)?;
        let test_y = self.targets(dataset, &split.test_indices)?;

        let (varmap, model) = PostureMlp::initialized(cfg.seed, &self.device)?;
        let mut optimizer = AdamW::new(varmap.all_vars(), cfg.optimizer.to_adamw_params())?;

        let pb = if cfg.show_progress {
            let pb = ProgressBar::new(cfg.epochs as u64);
            pb.set_style(ProgressStyle::with_template(
                "[{bar:40}] 에포크 {pos}/{len} {msg}",
            )?);
            pb
        } else {
            ProgressBar::hidden()
        };

        let batch_size = cfg.batch_size.max(1);
        let mut order: Vec<usize> = (0..split.train_len()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
        let mut history = Vec::with_capacity(cfg.epochs);

        for epoch in 0..cfg.epochs {
            if cfg.shuffle {
                order.shuffle(&mut rng);
            }

            let mut loss_sum = 0.0f64;
            for chunk in order.chunks(batch_size) {
                let ids: Vec<u32> = chunk.iter().map(|&i| i as u32).collect();
                let ids = Tensor::from_vec(ids, chunk.len(), &self.device)?;
                let xs = train_x.index_select(&ids, 0)?;
                let ys = train_y.index_select(&ids, 0)?;

                let loss = candle_nn::loss::mse(&model.forward(&xs)?, &ys)?;
                optimizer.backward_step(&loss)?;
                loss_sum += loss.to_scalar::<f32>()? as f64 * chunk.len() as f64;
            }

            let train_loss = loss_sum / order.len() as f64;
            let val_loss = candle_nn::loss::mse(&model.forward(&test_x)?, &test_y)?
                .to_scalar::<f32>()? as f64;

            log::debug!(
                "epoch {:3} | train_loss={:.4} val_loss={:.4}",
                epoch + 1,
                train_loss,
                val_loss
            );
            pb.set_message(format!("loss={:.4} val_loss={:.4}", train_loss, val_loss));
            pb.inc(1);

            history.push(EpochLog {
                epoch: epoch + 1,
                train_loss,
                val_loss,
            });
        }
        pb.finish_and_clear();

        let predictions: Vec<f64> = model
            .predict_tensor(&test_x)?
            .into_iter()
            .map(f64::from)
            .collect();
        let y_true: Vec<f64> = split
            .test_indices
            .iter()
            .map(|&i| dataset.samples[i].label)
            .collect();
        let metrics = RegressionMetrics::compute(&y_true, &predictions);
        log::info!("검증 지표: {}", metrics);

        Ok(TrainOutcome {
            varmap,
            model,
            split,
            history,
            metrics,
            predictions,
        })
    }

    /// `[n, 7]` 입력 텐서
    fn inputs(&self, dataset: &Dataset, indices: &[usize]) -> Result<Tensor> {
        let data = dataset.feature_matrix(indices);
        Ok(Tensor::from_vec(data, (indices.len(), FEATURE_COUNT), &self.device)?)
    }

    /// `[n, 1]` 라벨 텐서
    fn targets(&self, dataset: &Dataset, indices: &[usize]) -> Result<Tensor> {
        let data = dataset.labels(indices);
        Ok(Tensor::from_vec(data, (indices.len(), 1), &self.device)?)
    }
}
