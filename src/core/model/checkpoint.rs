//! 모델 저장/로딩 (safetensors 단일 파일)

use super::mlp::PostureMlp;
use super::topology::{Activation, DenseSpec, POSTURE_TOPOLOGY};
use anyhow::{anyhow, bail, Context, Result};
use byteorder::{ByteOrder, LittleEndian};
use candle_core::Device;
use candle_nn::VarMap;
use safetensors::{Dtype, SafeTensors};
use std::fs;
use std::path::Path;

/// Dense 레이어 가중치 (Keras 배치)
#[derive(Debug, Clone, PartialEq)]
pub struct DenseWeights {
    pub spec: DenseSpec,
    /// `[in, out]` 행 우선
    pub kernel: Vec<f32>,
    /// `[out]`
    pub bias: Vec<f32>,
}

impl DenseWeights {
    /// 순전파 (행렬 곱셈): output = input · kernel + bias
    pub fn forward(&self, input: &[f32]) -> Vec<f32> {
        let (in_dim, out_dim) = (self.spec.in_dim, self.spec.out_dim);
        let mut output = self.bias.clone();

        for (in_idx, &x) in input.iter().take(in_dim).enumerate() {
            let row = &self.kernel[in_idx * out_dim..(in_idx + 1) * out_dim];
            for (out_val, &w) in output.iter_mut().zip(row) {
                *out_val += x * w;
            }
        }

        if self.spec.activation == Activation::Relu {
            for v in output.iter_mut() {
                *v = v.max(0.0);
            }
        }
        output
    }
}

/// 저장된 모델의 전체 가중치
#[derive(Debug, Clone, PartialEq)]
pub struct ModelWeights {
    pub layers: Vec<DenseWeights>,
}

impl ModelWeights {
    /// 샘플 하나에 대한 점수
    pub fn predict_one(&self, features: &[f32]) -> f32 {
        let output = self
            .layers
            .iter()
            .fold(features.to_vec(), |hidden, layer| layer.forward(&hidden));
        output.first().copied().unwrap_or(f32::NAN)
    }

    pub fn param_count(&self) -> usize {
        self.layers.iter().map(|l| l.kernel.len() + l.bias.len()).sum()
    }
}

/// VarMap 을 safetensors 로 저장 (상위 디렉토리 자동 생성)
pub fn save_checkpoint<P: AsRef<Path>>(varmap: &VarMap, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("디렉토리 생성 실패: {}", parent.display()))?;
        }
    }
    varmap
        .save(path)
        .with_context(|| format!("모델 저장 실패: {}", path.display()))?;
    log::info!("모델 저장: {}", path.display());
    Ok(())
}

/// 저장된 모델을 candle 모델로 복원
pub fn load_posture_mlp<P: AsRef<Path>>(path: P, device: &Device) -> Result<(VarMap, PostureMlp)> {
    let path = path.as_ref();
    // 구조 검증을 먼저 해서 잘못된 파일은 명확한 메시지로 실패시킨다
    read_model_weights(path)?;

    let (mut varmap, model) = PostureMlp::initialized(0, device)?;
    varmap
        .load(path)
        .with_context(|| format!("모델 로딩 실패: {}", path.display()))?;
    Ok((varmap, model))
}

/// safetensors 파일에서 가중치를 읽고 고정 구조와 대조한다.
///
/// candle 의 `[out, in]` 가중치를 Keras 의 `[in, out]` 커널로 전치한다.
pub fn read_model_weights<P: AsRef<Path>>(path: P) -> Result<ModelWeights> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("모델 파일을 열 수 없음: {}", path.display()))?;
    let tensors = SafeTensors::deserialize(&bytes)
        .map_err(|e| anyhow!("모델 파일 형식 오류 ({}): {:?}", path.display(), e))?;

    let mut layers = Vec::with_capacity(POSTURE_TOPOLOGY.len());
    for spec in POSTURE_TOPOLOGY {
        let weight = read_f32_tensor(&tensors, &spec.weight_key(), &[spec.out_dim, spec.in_dim])?;
        let bias = read_f32_tensor(&tensors, &spec.bias_key(), &[spec.out_dim])?;
        layers.push(DenseWeights {
            spec,
            kernel: transpose(&weight, spec.out_dim, spec.in_dim),
            bias,
        });
    }

    Ok(ModelWeights { layers })
}

fn read_f32_tensor(tensors: &SafeTensors, name: &str, shape: &[usize]) -> Result<Vec<f32>> {
    let view = tensors
        .tensor(name)
        .map_err(|e| anyhow!("모델에 텐서 없음: {} ({:?})", name, e))?;

    if view.dtype() != Dtype::F32 {
        bail!("텐서 {} 의 dtype 이 F32 가 아님: {:?}", name, view.dtype());
    }
    if view.shape() != shape {
        bail!("텐서 {} 형상 불일치: {:?} (기대값 {:?})", name, view.shape(), shape);
    }

    let data = view.data();
    let count: usize = shape.iter().product();
    if data.len() != count * 4 {
        bail!("텐서 {} 데이터 길이 오류: {} bytes", name, data.len());
    }

    let mut values = vec![0.0f32; count];
    LittleEndian::read_f32_into(data, &mut values);
    Ok(values)
}

/// `[rows, cols]` → `[cols, rows]`
fn transpose(data: &[f32], rows: usize, cols: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; data.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}
