use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::{Config, SettingField};
use crate::economics::{repair_economics, RepairEconomicsInput};
use crate::ingest;
use crate::kiln::heat_loss::{compute_loss, Measurement};
use crate::survey::{run_survey, simulate_repairs, SurveyResult};
use crate::units::{to_kelvin, to_meter_per_second, TemperatureUnit, VelocityUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShellSurvey,
    SinglePoint,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Kiln Shell Toolbox ===");
    println!("1) 쉘 열손실 측량 (측정 파일)");
    println!("2) 단일 지점 계산");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ShellSurvey),
            "2" => return Ok(MenuChoice::SinglePoint),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 측정 파일 기반 쉘 측량 메뉴를 처리한다.
pub fn handle_shell_survey(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 쉘 열손실 측량 --");
    println!("측정 파일: 한 행이 한 지점, 같은 행의 여러 열은 평균 처리됩니다.");
    let path = read_line("측정 파일 경로: ")?;
    let ambient = read_f64(&format!(
        "주변 온도 [{}]: ",
        temp_unit_label(cfg.input_temperature_unit)
    ))?;
    let wind = read_f64(&format!(
        "풍속 [{}]: ",
        velocity_unit_label(cfg.input_velocity_unit)
    ))?;

    let measurements = ingest::read_readings_file(Path::new(path.trim()), ambient, wind, cfg)?;
    run_survey_and_print(&measurements, cfg)
}

/// 측량을 실행하고 결과 표/요약을 출력한다. 파일 모드와 메뉴 모드가 공유한다.
pub fn run_survey_and_print(measurements: &[Measurement], cfg: &Config) -> Result<(), AppError> {
    let survey = run_survey(measurements, cfg)?;
    print_survey(&survey);

    if let Some(repair) = simulate_repairs(measurements, &survey, cfg)? {
        println!("\n-- 보수 시뮬레이션 --");
        println!(
            "손상 의심 구간 {:.0} m, 정상 지점 표면 온도 중앙값 {:.1} K",
            repair.damaged_length_m, repair.median_surface_temp_k
        );
        println!(
            "총손실 {:.1} kW → {:.1} kW (절감 {:.1} kW)",
            repair.total_before_w / 1000.0,
            repair.total_after_w / 1000.0,
            repair.saved_w / 1000.0
        );
        let econ = repair_economics(
            RepairEconomicsInput {
                saved_w: repair.saved_w,
                damaged_length_m: repair.damaged_length_m,
            },
            cfg,
        );
        println!(
            "연간 석탄 절감 {:.1} ton, 연료비 절감 {:.0}",
            econ.coal_saved_ton_per_year, econ.fuel_saving_per_year
        );
        println!(
            "벽돌 {:.0}장, 보수 비용 {:.0}, 첫해 순절감 {:.0}",
            econ.bricks_required, econ.repair_cost, econ.net_saving_first_year
        );
    } else {
        println!("\n상방 이상치가 없어 보수 시뮬레이션을 생략합니다.");
    }
    Ok(())
}

fn print_survey(survey: &SurveyResult) {
    println!("\n위치        복사[W]      대류[W]      총손실[W]   이상치");
    for row in &survey.rows {
        println!(
            "{:<10} {:>12.1} {:>12.1} {:>12.1}   {}",
            row.location_id,
            row.radiation_w,
            row.convection_w,
            row.total_w,
            if row.is_outlier { "*" } else { "" }
        );
    }
    let r = &survey.report;
    println!(
        "\nQ1={:.1}  Q3={:.1}  IQR={:.1}  경계=[{:.1}, {:.1}] (k={})",
        r.q1, r.q3, r.iqr, r.lower_bound, r.upper_bound, r.k
    );
    println!("배치 총손실: {:.1} kW", survey.total_w / 1000.0);
    if let Some(specific) = survey.specific_total_wh_per_kg {
        println!("클링커 kg당 손실: {specific:.2} Wh/kg");
    }

    if survey.high_outliers.is_empty() {
        println!("쉘 손상 의심 지점 없음");
    } else {
        let ids: Vec<&str> = survey
            .high_outliers
            .iter()
            .map(|&i| survey.rows[i].location_id.as_str())
            .collect();
        println!("쉘 손상 의심 지점: {}", ids.join(" "));
    }
    if survey.low_outliers.is_empty() {
        println!("코팅 형성 의심 지점 없음");
    } else {
        let ids: Vec<&str> = survey
            .low_outliers
            .iter()
            .map(|&i| survey.rows[i].location_id.as_str())
            .collect();
        println!("코팅 형성 의심 지점: {}", ids.join(" "));
    }
    for err in &survey.skipped {
        println!("제외됨: {err}");
    }
}

/// 단일 지점 계산 메뉴를 처리한다.
pub fn handle_single_point(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단일 지점 계산 --");
    let surface = read_f64(&format!(
        "표면 온도 [{}]: ",
        temp_unit_label(cfg.input_temperature_unit)
    ))?;
    let ambient = read_f64(&format!(
        "주변 온도 [{}]: ",
        temp_unit_label(cfg.input_temperature_unit)
    ))?;
    let wind = read_f64(&format!(
        "풍속 [{}]: ",
        velocity_unit_label(cfg.input_velocity_unit)
    ))?;
    let area = read_f64("방열 면적 [m²] (0 입력 시 기본값): ")?;

    let m = Measurement {
        location_id: "점검점".to_string(),
        surface_temp_k: to_kelvin(surface, cfg.input_temperature_unit),
        ambient_temp_k: to_kelvin(ambient, cfg.input_temperature_unit),
        wind_velocity_m_per_s: to_meter_per_second(wind, cfg.input_velocity_unit),
        surface_area_m2: if area > 0.0 { Some(area) } else { None },
    };
    let loss = compute_loss(&m, cfg)?;
    println!(
        "복사 {:.1} W, 대류 {:.1} W, 총 {:.1} W",
        loss.radiation_w, loss.convection_w, loss.total_w
    );
    Ok(())
}

/// 설정 메뉴를 처리한다. 유효하지 않은 값은 적용하지 않고 이전 값을 유지한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "방사율 {:.2}, k {:.1}, 킬른 직경 {:.2} m, 측정 간격 {:.1} m",
        cfg.emissivity, cfg.outlier_k, cfg.kiln.diameter_m, cfg.kiln.interval_m
    );
    match cfg.clinker_production_kg_per_h {
        Some(p) => println!("클링커 생산량 {p:.0} kg/h"),
        None => println!("클링커 생산량 미지정 (kg당 손실 보고 없음)"),
    }
    println!("1) 방사율  2) 이상치 배율 k  3) 킬른 직경  4) 측정 간격  5) 클링커 생산량");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    let (field, prompt) = match sel.trim() {
        "" => return Ok(()),
        "1" => (SettingField::Emissivity, "방사율 (0~1]: "),
        "2" => (SettingField::OutlierK, "k (통상 1.5, 극단 이상치 3.0): "),
        "3" => (SettingField::KilnDiameter, "킬른 직경 [m]: "),
        "4" => (SettingField::KilnInterval, "측정 간격 [m]: "),
        "5" => (
            SettingField::ClinkerProduction,
            "클링커 생산량 [kg/h] (0 입력 시 해제): ",
        ),
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            return Ok(());
        }
    };
    let value = read_f64(prompt)?;
    if let Err(e) = cfg.apply_setting(field, value) {
        println!("유효하지 않은 값이라 이전 설정을 유지합니다: {e}");
    }
    Ok(())
}

fn temp_unit_label(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Kelvin => "K",
        TemperatureUnit::Celsius => "°C",
        TemperatureUnit::Fahrenheit => "°F",
    }
}

fn velocity_unit_label(unit: VelocityUnit) -> &'static str {
    match unit {
        VelocityUnit::MeterPerSecond => "m/s",
        VelocityUnit::KilometerPerHour => "km/h",
        VelocityUnit::FootPerMinute => "ft/min",
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
