//! # 데이터셋 모듈
//!
//! CSV 로딩, 라벨/특징 필터링, 결정적 학습/검증 분할, 통계 요약

pub mod loader;
pub mod samples;
pub mod split;
pub mod stats;


pub use loader::*;
pub use samples::*;
pub use split::*;
pub use stats::*;
