use crate::config::Config;
use crate::ingest;
use crate::kiln::heat_loss;
use crate::survey;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드/검증 오류
    Config(crate::config::ConfigError),
    /// 측정 파일 파싱 오류
    Ingest(ingest::IngestError),
    /// 단일 측정값 계산 오류
    Measurement(heat_loss::MeasurementError),
    /// 측량 파이프라인 오류
    Survey(survey::SurveyError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Ingest(e) => write!(f, "측정 파일 오류: {e}"),
            AppError::Measurement(e) => write!(f, "측정값 오류: {e}"),
            AppError::Survey(e) => write!(f, "측량 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ingest::IngestError> for AppError {
    fn from(value: ingest::IngestError) -> Self {
        AppError::Ingest(value)
    }
}

impl From<heat_loss::MeasurementError> for AppError {
    fn from(value: heat_loss::MeasurementError) -> Self {
        AppError::Measurement(value)
    }
}

impl From<survey::SurveyError> for AppError {
    fn from(value: survey::SurveyError) -> Self {
        AppError::Survey(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::ShellSurvey => ui_cli::handle_shell_survey(config)?,
            MenuChoice::SinglePoint => ui_cli::handle_single_point(config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
