//! 배치 통계 모듈 모음.

pub mod outlier;

pub use outlier::*;
