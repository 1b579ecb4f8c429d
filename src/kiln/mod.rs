//! 킬른 쉘 관련 계산 모듈 모음.

pub mod geometry;
pub mod heat_loss;

pub use geometry::*;
pub use heat_loss::*;
