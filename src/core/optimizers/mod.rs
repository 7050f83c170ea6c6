//! # 옵티마이저 구성
//!
//! 학습 루프가 쓰는 candle `AdamW` 의 하이퍼파라미터

pub mod config;

#[cfg(test)]
mod __tests__;

pub use config::{AdamConfig, OptimizerConfig};
