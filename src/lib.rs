//! 킬른 쉘 열손실 분석 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 GUI 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod economics;
pub mod ingest;
pub mod kiln;
pub mod stats;
pub mod survey;
pub mod ui_cli;
pub mod units;
