use alloy_design_toolbox::metallurgy::{
    cooling_path, first_nose_crossing, merge_for_overlay, ttt_curve, OverlayPoint,
};
use alloy_design_toolbox::process::QuenchMedium;
use alloy_design_toolbox::tables::ReferenceTables;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn ttt_nose_for_zero_carbon_equivalent() {
    let ttt = ttt_curve(0.0);
    assert_eq!(ttt.nose_time_s, 1.0);
    assert_eq!(ttt.nose_temperature_c, 550.0);
    assert_eq!(ttt.points.len(), 29);
    assert_eq!(ttt.points[0].temperature_c, 720.0);
    assert_eq!(ttt.points[28].temperature_c, 160.0);

    // 720 °C는 상한 10 000 s에 걸린다
    assert_eq!(ttt.points[0].time_s, 10_000.0);
    let at_560 = ttt
        .points
        .iter()
        .find(|p| p.temperature_c == 560.0)
        .expect("560 °C sample");
    assert_close(at_560.time_s, std::f64::consts::E, 1e-9);
}

#[test]
fn ttt_times_never_undercut_the_nose() {
    for ce in [0.0, 0.3, 0.77, 4.6] {
        let ttt = ttt_curve(ce);
        assert!(ttt
            .points
            .iter()
            .all(|p| p.time_s >= ttt.nose_time_s && p.time_s <= 10_000.0));
        assert!(ttt
            .points
            .windows(2)
            .all(|w| w[0].temperature_c > w[1].temperature_c));
    }
}

#[test]
fn higher_carbon_equivalent_shifts_nose() {
    let lean = ttt_curve(0.2);
    let rich = ttt_curve(0.8);
    assert!(rich.nose_time_s > lean.nose_time_s);
    assert!(rich.nose_temperature_c < lean.nose_temperature_c);
}

#[test]
fn cooling_path_stops_at_first_point_below_threshold() {
    let tables = ReferenceTables::standard();
    for medium in QuenchMedium::ALL {
        let path = cooling_path(medium, &tables);
        let last = path.last().expect("non-empty path");
        assert!(last.temperature_c <= 30.0, "{medium}: {last:?}");
        assert!(path[..path.len() - 1].iter().all(|p| p.temperature_c > 30.0));
        assert!(path.iter().all(|p| p.time_s <= 200.0 && p.temperature_c >= 25.0));
        assert_close(path[0].time_s, 0.1, 1e-12);
    }
}

#[test]
fn water_cooling_path_samples() {
    let path = cooling_path(QuenchMedium::Water, &ReferenceTables::standard());
    assert_eq!(path.len(), 17);
    assert_close(path[0].temperature_c, 870.0, 1e-9);
    assert_close(path[1].time_s, 0.125, 1e-12);
    assert_eq!(path[16].temperature_c, 25.0);
}

#[test]
fn overlay_uses_first_arrival_per_bucket() {
    let ttt = ttt_curve(0.0);
    let cooling = cooling_path(QuenchMedium::Water, &ReferenceTables::standard());
    let overlay = merge_for_overlay(&ttt, &cooling);
    assert_eq!(overlay.len(), ttt.points.len());
    assert!(overlay
        .windows(2)
        .all(|w| w[0].temperature_c > w[1].temperature_c));

    let at = |t: f64| {
        overlay
            .iter()
            .find(|p| p.temperature_c == t)
            .copied()
            .expect("bucket")
    };
    // 721.2 °C (t≈0.596 s)만 720 구간에 들어온다
    assert_close(at(720.0).cooling_time_s.expect("720 bucket"), 0.1 * 1.25f64.powi(8), 1e-9);
    assert_eq!(at(700.0).cooling_time_s, None);
    assert_eq!(at(720.0).ttt_time_s, 10_000.0);
}

#[test]
fn nose_crossing_detects_first_intersection() {
    let overlay = [
        OverlayPoint {
            temperature_c: 600.0,
            ttt_time_s: 20.0,
            cooling_time_s: Some(5.0),
        },
        OverlayPoint {
            temperature_c: 580.0,
            ttt_time_s: 8.0,
            cooling_time_s: None,
        },
        OverlayPoint {
            temperature_c: 560.0,
            ttt_time_s: 4.0,
            cooling_time_s: Some(6.0),
        },
        OverlayPoint {
            temperature_c: 540.0,
            ttt_time_s: 3.0,
            cooling_time_s: Some(7.0),
        },
    ];
    let crossing = first_nose_crossing(&overlay).expect("crossing");
    assert_eq!(crossing.temperature_c, 560.0);
    assert!(first_nose_crossing(&overlay[..2]).is_none());
}

#[test]
fn water_quench_of_pure_iron_avoids_the_nose() {
    let ttt = ttt_curve(0.0);
    let cooling = cooling_path(QuenchMedium::Water, &ReferenceTables::standard());
    assert!(first_nose_crossing(&merge_for_overlay(&ttt, &cooling)).is_none());
}
