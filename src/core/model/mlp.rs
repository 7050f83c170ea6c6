//! candle 기반 자세 점수 MLP

use super::topology::{Activation, POSTURE_TOPOLOGY};
use crate::core::features::{FeatureVector, FEATURE_COUNT};
use anyhow::Result;
use candle_core::{DType, Device, Tensor};
use candle_nn::{Linear, Module, VarBuilder, VarMap};
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 고정 구조 피드포워드 회귀 모델
#[derive(Debug, Clone)]
pub struct PostureMlp {
    layers: Vec<(Linear, Activation)>,
}

impl PostureMlp {
    /// VarBuilder 에 `dense.weight`, `dense.bias`, ... 변수를 만들며 모델 생성
    pub fn new(vb: VarBuilder) -> candle_core::Result<Self> {
        let mut layers = Vec::with_capacity(POSTURE_TOPOLOGY.len());
        for spec in POSTURE_TOPOLOGY.iter() {
            let linear = candle_nn::linear(spec.in_dim, spec.out_dim, vb.pp(spec.name))?;
            layers.push((linear, spec.activation));
        }
        Ok(Self { layers })
    }

    /// 새 VarMap 위에 모델을 만들고 시드 고정 Glorot 초기화
    pub fn initialized(seed: u64, device: &Device) -> Result<(VarMap, Self)> {
        let mut varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, device);
        let model = Self::new(vb)?;
        glorot_init(&mut varmap, seed, device)?;
        Ok((varmap, model))
    }

    /// 특징 벡터 묶음에 대한 점수 예측
    pub fn predict(&self, features: &[FeatureVector], device: &Device) -> Result<Vec<f32>> {
        if features.is_empty() {
            return Ok(Vec::new());
        }
        let data: Vec<f32> = features.iter().flat_map(|f| f.to_f32_array()).collect();
        let xs = Tensor::from_vec(data, (features.len(), FEATURE_COUNT), device)?;
        self.predict_tensor(&xs)
    }

    /// `[n, 7]` 입력 텐서에 대한 예측을 평탄화해서 돌려준다
    pub fn predict_tensor(&self, xs: &Tensor) -> Result<Vec<f32>> {
        let ys = self.forward(xs)?;
        Ok(ys.flatten_all()?.to_vec1::<f32>()?)
    }
}

impl Module for PostureMlp {
    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        let mut hidden = xs.clone();
        for (linear, activation) in &self.layers {
            hidden = linear.forward(&hidden)?;
            if *activation == Activation::Relu {
                hidden = hidden.relu()?;
            }
        }
        Ok(hidden)
    }
}

/// Keras 기본값과 같은 초기화: 가중치 glorot_uniform, 편향 0
pub fn glorot_init(varmap: &mut VarMap, seed: u64, device: &Device) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for spec in POSTURE_TOPOLOGY.iter() {
        let limit = (6.0 / (spec.in_dim + spec.out_dim) as f32).sqrt();
        let dist = Uniform::new_inclusive(-limit, limit);
        let weights: Vec<f32> = (0..spec.in_dim * spec.out_dim)
            .map(|_| dist.sample(&mut rng))
            .collect();

        let weight = Tensor::from_vec(weights, (spec.out_dim, spec.in_dim), device)?;
        let bias = Tensor::zeros(spec.out_dim, DType::F32, device)?;
        varmap.set_one(spec.weight_key(), weight)?;
        varmap.set_one(spec.bias_key(), bias)?;
    }

    Ok(())
}
