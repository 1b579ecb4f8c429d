use kiln_shell_toolbox::config::Config;
use kiln_shell_toolbox::kiln::heat_loss::{
    compute_loss, convection_coefficient, Measurement, MeasurementError,
};

fn point(surface_temp_k: f64, ambient_temp_k: f64, wind: f64) -> Measurement {
    Measurement {
        location_id: "1m".to_string(),
        surface_temp_k,
        ambient_temp_k,
        wind_velocity_m_per_s: wind,
        surface_area_m2: Some(10.0),
    }
}

#[test]
fn total_is_exact_sum_of_components() {
    let cfg = Config::default();
    let loss = compute_loss(&point(580.0, 302.0, 3.4), &cfg).expect("valid point");
    assert_eq!(loss.total_w, loss.radiation_w + loss.convection_w);
}

#[test]
fn radiation_monotone_in_surface_temperature() {
    let cfg = Config::default();
    let cold = compute_loss(&point(500.0, 300.0, 2.0), &cfg).unwrap();
    let hot = compute_loss(&point(520.0, 300.0, 2.0), &cfg).unwrap();
    assert!(hot.radiation_w > cold.radiation_w);
}

#[test]
fn radiation_monotone_decreasing_in_ambient_temperature() {
    let cfg = Config::default();
    let cool_air = compute_loss(&point(500.0, 290.0, 2.0), &cfg).unwrap();
    let warm_air = compute_loss(&point(500.0, 310.0, 2.0), &cfg).unwrap();
    assert!(cool_air.radiation_w > warm_air.radiation_w);
}

#[test]
fn convection_changes_sign_at_ambient_crossing() {
    let cfg = Config::default();
    let hotter = compute_loss(&point(310.0, 300.0, 1.0), &cfg).unwrap();
    let equal = compute_loss(&point(300.0, 300.0, 1.0), &cfg).unwrap();
    let colder = compute_loss(&point(290.0, 300.0, 1.0), &cfg).unwrap();
    assert!(hotter.convection_w > 0.0);
    assert_eq!(equal.convection_w, 0.0);
    assert!(colder.convection_w < 0.0);
    // 표면이 차가우면 총손실도 음수(열 유입)가 될 수 있다.
    assert!(colder.total_w < 0.0);
}

#[test]
fn convection_coefficient_follows_configured_fit() {
    let cfg = Config::default();
    // 기본값: h = 5.7 + 3.8·v
    let h0 = convection_coefficient(&cfg, 0.0);
    let h3 = convection_coefficient(&cfg, 3.0);
    assert!((h0 - 5.7).abs() < 1e-12);
    assert!((h3 - 17.1).abs() < 1e-12);
}

#[test]
fn stefan_boltzmann_reference_value() {
    // ε=1, A=1, Ta→0에 가까운 극저온이 아닌 실제 범위에서 수치 확인:
    // σ·(400⁴ − 300⁴) = 5.670374e-8 × 1.75e10 ≈ 992.3 W/m²
    let mut cfg = Config::default();
    cfg.emissivity = 1.0;
    let m = point(400.0, 300.0, 0.0);
    let loss = compute_loss(
        &Measurement {
            surface_area_m2: Some(1.0),
            ..m
        },
        &cfg,
    )
    .unwrap();
    let expected = 5.670374e-8 * (400f64.powi(4) - 300f64.powi(4));
    assert!((loss.radiation_w - expected).abs() < 1e-9);
}

#[test]
fn negative_wind_velocity_rejected() {
    let cfg = Config::default();
    let err = compute_loss(&point(500.0, 300.0, -1.0), &cfg).unwrap_err();
    let MeasurementError::InvalidField {
        location_id,
        field,
        value,
    } = err;
    assert_eq!(location_id, "1m");
    assert_eq!(field, "wind_velocity_m_per_s");
    assert_eq!(value, -1.0);
}

#[test]
fn non_positive_absolute_temperature_rejected() {
    let cfg = Config::default();
    assert!(compute_loss(&point(0.0, 300.0, 1.0), &cfg).is_err());
    assert!(compute_loss(&point(500.0, -10.0, 1.0), &cfg).is_err());
}

#[test]
fn non_positive_area_rejected_but_default_area_applies() {
    let cfg = Config::default();
    let mut m = point(500.0, 300.0, 1.0);
    m.surface_area_m2 = Some(0.0);
    assert!(compute_loss(&m, &cfg).is_err());

    m.surface_area_m2 = None;
    let loss = compute_loss(&m, &cfg).expect("default area");
    // 기본 면적 = π × 직경 × 간격
    let explicit = Measurement {
        surface_area_m2: Some(cfg.default_surface_area_m2),
        ..m
    };
    let reference = compute_loss(&explicit, &cfg).unwrap();
    assert_eq!(loss.total_w, reference.total_w);
}

#[test]
fn non_finite_inputs_rejected() {
    let cfg = Config::default();
    assert!(compute_loss(&point(f64::NAN, 300.0, 1.0), &cfg).is_err());
    assert!(compute_loss(&point(500.0, 300.0, f64::INFINITY), &cfg).is_err());
}

#[test]
fn identical_inputs_yield_bit_identical_results() {
    let cfg = Config::default();
    let m = point(583.2, 301.7, 4.1);
    let a = compute_loss(&m, &cfg).unwrap();
    let b = compute_loss(&m, &cfg).unwrap();
    assert_eq!(a.total_w.to_bits(), b.total_w.to_bits());
    assert_eq!(a.radiation_w.to_bits(), b.radiation_w.to_bits());
    assert_eq!(a.convection_w.to_bits(), b.convection_w.to_bits());
}
