// tests/detector_tests.rs
use opencv::{
    core::{self, CV_8UC3, Point, Scalar, Vec3b},
    imgproc,
    prelude::*,
};
use trafficlight_core::{ColorRangeTable, LightState};
use trafficlight_cv::{DetectionConfig, Result, TrafficLightDetector};

fn detector() -> TrafficLightDetector {
    TrafficLightDetector::new(
        ColorRangeTable::traffic_light().unwrap(),
        DetectionConfig::default(),
    )
    .unwrap()
}

/// 200x200 HSV canvas uniformly filled, (120,100,100) is outside every band.
fn hsv_canvas(h: u8, s: u8, v: u8) -> Mat {
    Mat::new_rows_cols_with_default(
        200,
        200,
        CV_8UC3,
        Scalar::from((h as f64, s as f64, v as f64)),
    )
    .unwrap()
}

fn bgr_canvas() -> Mat {
    Mat::new_rows_cols_with_default(200, 200, CV_8UC3, Scalar::from((0.0, 0.0, 0.0))).unwrap()
}

fn draw_disc(hsv: &mut Mat, center: (i32, i32), radius: i32, color: (u8, u8, u8)) {
    imgproc::circle(
        hsv,
        Point::new(center.0, center.1),
        radius,
        Scalar::from((color.0 as f64, color.1 as f64, color.2 as f64)),
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )
    .unwrap();
}

#[test]
fn test_red_disc_reports_red_with_tight_box() -> Result<()> {
    let mut hsv = hsv_canvas(120, 100, 100);
    draw_disc(&mut hsv, (100, 100), 20, (5, 200, 200));
    let mut output = bgr_canvas();

    let result = detector().detect(&hsv, &mut output)?;
    assert_eq!(result.state, LightState::Red);

    let region = result.region.expect("matched disc must have a region");
    assert!((region.center().x - 100).abs() <= 2);
    assert!((region.center().y - 100).abs() <= 2);
    assert!((37..=43).contains(&region.width));
    assert!((37..=43).contains(&region.height));

    // The box corner is drawn in the configured color (red, BGR order).
    let corner = output.at_2d::<Vec3b>(region.y, region.x)?;
    assert_eq!(*corner, Vec3b::from([0, 0, 255]));
    Ok(())
}

#[test]
fn test_green_disc_reports_green() -> Result<()> {
    let mut hsv = hsv_canvas(120, 100, 100);
    draw_disc(&mut hsv, (100, 100), 20, (60, 100, 100));
    let mut output = bgr_canvas();

    let result = detector().detect(&hsv, &mut output)?;
    assert_eq!(result.state, LightState::Green);
    assert!(result.region.is_some());
    Ok(())
}

#[test]
fn test_out_of_band_fill_reports_not_and_leaves_output_untouched() -> Result<()> {
    let hsv = hsv_canvas(120, 100, 100);
    let mut output = bgr_canvas();

    let result = detector().detect(&hsv, &mut output)?;
    assert_eq!(result.state, LightState::Not);
    assert!(result.region.is_none());

    let mut gray = Mat::default();
    imgproc::cvt_color(&output, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;
    assert_eq!(core::count_non_zero(&gray)?, 0);
    Ok(())
}

#[test]
fn test_thin_red_bar_fails_circularity() -> Result<()> {
    let mut hsv = hsv_canvas(120, 100, 100);
    // Thin elongated bar: plenty of area, nowhere near circular. Tall enough
    // to survive the 3x3 denoise pass so the circularity test is what rejects it.
    imgproc::rectangle(
        &mut hsv,
        core::Rect::new(20, 98, 150, 4),
        Scalar::from((5.0, 200.0, 200.0)),
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )?;
    let mut output = bgr_canvas();

    let result = detector().detect(&hsv, &mut output)?;
    assert_eq!(result.state, LightState::Not);
    Ok(())
}

#[test]
fn test_red_wins_over_simultaneous_green() -> Result<()> {
    let mut hsv = hsv_canvas(120, 100, 100);
    draw_disc(&mut hsv, (150, 150), 20, (60, 200, 200));
    draw_disc(&mut hsv, (50, 50), 20, (5, 200, 200));
    let mut output = bgr_canvas();

    let result = detector().detect(&hsv, &mut output)?;
    assert_eq!(result.state, LightState::Red);
    // The box sits on the red disc, not the green one.
    let region = result.region.unwrap();
    assert!((region.center().x - 50).abs() <= 2);
    assert!((region.center().y - 50).abs() <= 2);
    Ok(())
}

#[test]
fn test_detection_is_idempotent() -> Result<()> {
    let detector = detector();
    let mut hsv = hsv_canvas(120, 100, 100);
    draw_disc(&mut hsv, (100, 100), 20, (5, 200, 200));

    let first = detector.detect(&hsv, &mut bgr_canvas())?;
    let second = detector.detect(&hsv, &mut bgr_canvas())?;
    assert_eq!(first.state, second.state);
    assert_eq!(first.region, second.region);
    Ok(())
}

#[test]
fn test_high_hue_red_band_also_matches() -> Result<()> {
    // Red wraps the hue origin; the second red band covers 170..=180.
    let mut hsv = hsv_canvas(120, 100, 100);
    draw_disc(&mut hsv, (100, 100), 20, (175, 200, 200));
    let mut output = bgr_canvas();

    let result = detector().detect(&hsv, &mut output)?;
    assert_eq!(result.state, LightState::Red);
    Ok(())
}
