//! # 자세 점수 회귀 모델
//!
//! 고정 구조 7 → 16 → 16 → 1 MLP (candle) 와 safetensors 체크포인트

pub mod topology;
pub mod mlp;
pub mod checkpoint;


pub use topology::*;
pub use mlp::*;
pub use checkpoint::*;
