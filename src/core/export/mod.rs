//! # TensorFlow.js layers-model 내보내기

pub mod tfjs;


pub use tfjs::*;
