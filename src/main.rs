use clap::Parser;
use std::path::PathBuf;

use kiln_shell_toolbox::{app, config, ingest, ui_cli};

/// 킬른 쉘 열손실 측량 도구. 파일을 지정하면 비대화형으로 한 번 분석한다.
#[derive(Debug, Parser)]
#[command(name = "kiln_shell_toolbox", version)]
struct Cli {
    /// 표면 온도 측정 파일 (행 = 측정점, 열 = 반복 판독)
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// 주변 온도 (설정된 입력 단위)
    #[arg(long, default_value_t = 29.0)]
    ambient: f64,
    /// 풍속 (설정된 입력 단위)
    #[arg(long, default_value_t = 3.0)]
    wind: f64,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 파일 모드 또는 메뉴 모드를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    match cli.file {
        Some(path) => {
            let measurements = ingest::read_readings_file(&path, cli.ambient, cli.wind, &cfg)?;
            ui_cli::run_survey_and_print(&measurements, &cfg)?;
        }
        None => app::run(&mut cfg)?,
    }
    Ok(())
}
