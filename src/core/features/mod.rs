pub mod landmarks;
pub mod geometry;
pub mod extractor;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use landmarks::*;
pub use geometry::*;
pub use extractor::*;
