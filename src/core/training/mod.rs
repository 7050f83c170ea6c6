//! # 학습 모듈
//!
//! 고정 에포크/배치 Adam 학습 루프와 회귀 지표

pub mod config;
pub mod metrics;
pub mod trainer;

#[cfg(test)]
mod __tests__;

pub use config::*;
pub use metrics::*;
pub use trainer::*;
