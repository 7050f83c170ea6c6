//! 저장된 모델을 TF.js layers-model 디렉토리로 변환
//!
//! `model.json` (Keras Sequential 토폴로지 + weightsManifest) 과
//! `group1-shard{i}of{n}.bin` 파일들을 만든다. 가중치 값은 바꾸지 않고
//! 배치만 Keras 규칙(커널 `[in, out]`)으로 맞춘다.

use crate::core::features::FEATURE_COUNT;
use crate::core::model::{Activation, ModelWeights};
use anyhow::{bail, Context, Result};
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// TF.js 변환기 기본 샤드 크기 (4 MiB)
pub const DEFAULT_SHARD_BYTES: usize = 4 * 1024 * 1024;

/// 매니페스트 파일 이름
pub const MODEL_JSON: &str = "model.json";

/// 내보내기 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// 샤드 하나의 최대 바이트 수
    pub shard_bytes: usize,
    /// `generatedBy` 필드
    pub generated_by: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            shard_bytes: DEFAULT_SHARD_BYTES,
            generated_by: format!("zen_posture {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ExportConfig {
    pub fn with_shard_bytes(mut self, bytes: usize) -> Self {
        // f32 경계에서 자르도록 4 의 배수로 맞춘다
        self.shard_bytes = (bytes / 4).max(1) * 4;
        self
    }
}

/// `model.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelJson {
    pub format: String,
    pub generated_by: String,
    pub converted_by: Option<String>,
    pub model_topology: serde_json::Value,
    pub weights_manifest: Vec<WeightsGroup>,
}

/// 샤드 그룹
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsGroup {
    pub paths: Vec<String>,
    pub weights: Vec<WeightEntry>,
}

/// 매니페스트 안의 가중치 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub name: String,
    pub shape: Vec<usize>,
    pub dtype: String,
}

impl WeightEntry {
    pub fn element_count(&self) -> usize {
        self.shape.iter().product()
    }
}

/// 내보내기 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub model_json: PathBuf,
    pub shards: Vec<PathBuf>,
    pub total_bytes: usize,
}

/// 가중치를 layers-model 디렉토리로 쓴다.
pub fn export_layers_model<P: AsRef<Path>>(
    weights: &ModelWeights,
    out_dir: P,
    config: &ExportConfig,
) -> Result<ExportSummary> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("출력 디렉토리 생성 실패: {}", out_dir.display()))?;

    // 매니페스트 순서대로 가중치 직렬화
    let mut entries = Vec::with_capacity(weights.layers.len() * 2);
    let mut buffer: Vec<u8> = Vec::with_capacity(weights.param_count() * 4);
    for layer in &weights.layers {
        let spec = layer.spec;
        entries.push(WeightEntry {
            name: format!("{}/kernel", spec.name),
            shape: vec![spec.in_dim, spec.out_dim],
            dtype: "float32".to_string(),
        });
        entries.push(WeightEntry {
            name: format!("{}/bias", spec.name),
            shape: vec![spec.out_dim],
            dtype: "float32".to_string(),
        });
        for &value in layer.kernel.iter().chain(layer.bias.iter()) {
            buffer.write_f32::<LittleEndian>(value)?;
        }
    }

    // 샤드 분할
    let chunks: Vec<&[u8]> = buffer.chunks(config.shard_bytes.max(4)).collect();
    let shard_count = chunks.len().max(1);
    let mut shard_names = Vec::with_capacity(shard_count);
    let mut shard_paths = Vec::with_capacity(shard_count);
    for i in 0..shard_count {
        let name = format!("group1-shard{}of{}.bin", i + 1, shard_count);
        let path = out_dir.join(&name);
        let data = chunks.get(i).copied().unwrap_or(&[]);
        fs::write(&path, data).with_context(|| format!("샤드 저장 실패: {}", path.display()))?;
        shard_names.push(name);
        shard_paths.push(path);
    }

    let model_json = ModelJson {
        format: "layers-model".to_string(),
        generated_by: config.generated_by.clone(),
        converted_by: Some(format!("zen_posture export_tfjs {}", env!("CARGO_PKG_VERSION"))),
        model_topology: sequential_topology(weights),
        weights_manifest: vec![WeightsGroup {
            paths: shard_names,
            weights: entries,
        }],
    };

    let manifest_path = out_dir.join(MODEL_JSON);
    fs::write(&manifest_path, serde_json::to_string_pretty(&model_json)?)
        .with_context(|| format!("매니페스트 저장 실패: {}", manifest_path.display()))?;

    log::info!(
        "layers-model 저장: {} ({} bytes, 샤드 {} 개)",
        out_dir.display(),
        buffer.len(),
        shard_paths.len()
    );

    Ok(ExportSummary {
        model_json: manifest_path,
        shards: shard_paths,
        total_bytes: buffer.len(),
    })
}

/// Keras Sequential 토폴로지 JSON
fn sequential_topology(weights: &ModelWeights) -> serde_json::Value {
    let layers: Vec<serde_json::Value> = weights
        .layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let spec = layer.spec;
            let activation = match spec.activation {
                Activation::Relu => "relu",
                Activation::Linear => "linear",
            };
            let mut config = serde_json::json!({
                "name": spec.name,
                "trainable": true,
                "dtype": "float32",
                "units": spec.out_dim,
                "activation": activation,
                "use_bias": true,
                "kernel_initializer": {
                    "class_name": "GlorotUniform",
                    "config": { "seed": null }
                },
                "bias_initializer": { "class_name": "Zeros", "config": {} },
                "kernel_regularizer": null,
                "bias_regularizer": null,
                "activity_regularizer": null,
                "kernel_constraint": null,
                "bias_constraint": null
            });
            if i == 0 {
                config["batch_input_shape"] = serde_json::json!([null, FEATURE_COUNT]);
            }
            serde_json::json!({ "class_name": "Dense", "config": config })
        })
        .collect();

    serde_json::json!({
        "class_name": "Sequential",
        "config": { "name": "sequential", "layers": layers },
        "keras_version": "tfjs-layers 4.0.0",
        "backend": "tensor_flow.js"
    })
}

/// 내보낸 디렉토리를 다시 읽어 (이름, 형상, 값) 목록으로 복원
pub fn read_layers_model<P: AsRef<Path>>(dir: P) -> Result<Vec<(WeightEntry, Vec<f32>)>> {
    let dir = dir.as_ref();
    let manifest_path = dir.join(MODEL_JSON);
    let text = fs::read_to_string(&manifest_path)
        .with_context(|| format!("매니페스트를 열 수 없음: {}", manifest_path.display()))?;
    let model_json: ModelJson = serde_json::from_str(&text)
        .with_context(|| format!("매니페스트 파싱 실패: {}", manifest_path.display()))?;

    let mut weights = Vec::new();
    for group in model_json.weights_manifest {
        let mut bytes = Vec::new();
        for shard in &group.paths {
            let path = dir.join(shard);
            bytes.extend(fs::read(&path).with_context(|| format!("샤드를 열 수 없음: {}", path.display()))?);
        }

        let mut offset = 0usize;
        for entry in group.weights {
            if entry.dtype != "float32" {
                bail!("지원하지 않는 dtype: {} ({})", entry.dtype, entry.name);
            }
            let len = entry.element_count() * 4;
            let Some(chunk) = bytes.get(offset..offset + len) else {
                bail!("샤드 데이터 부족: {}", entry.name);
            };
            let mut values = vec![0.0f32; entry.element_count()];
            LittleEndian::read_f32_into(chunk, &mut values);
            offset += len;
            weights.push((entry, values));
        }
    }

    Ok(weights)
}
