use anyhow::Result;
use opencv::{
    core::{Point, Scalar, Size},
    highgui, imgproc,
    prelude::*,
};
use std::process::ExitCode;
use trafficlight_core::ColorRangeTable;
use trafficlight_cv::{DetectionConfig, FrameSource, TrafficLightDetector};

const WINDOW: &str = "Traffic Light Detection";

fn main() -> ExitCode {
    let Some(spec) = std::env::args().nth(1) else {
        eprintln!("Usage: trafficlight <video_file_or_camera_index>");
        return ExitCode::FAILURE;
    };

    match run(&spec) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(spec: &str) -> Result<()> {
    let table = ColorRangeTable::traffic_light()?;
    let detector = TrafficLightDetector::new(table, DetectionConfig::default())?;
    let mut source = FrameSource::open(spec)?;

    // One frame fully processed before the next is requested; nothing
    // persists across iterations except the detector itself.
    while let Some(frame) = source.next_frame()? {
        let mut blurred = Mat::default();
        imgproc::gaussian_blur(
            &frame,
            &mut blurred,
            Size::new(5, 5),
            0.0,
            0.0,
            opencv::core::BORDER_DEFAULT,
        )?;

        let mut hsv = Mat::default();
        imgproc::cvt_color(&blurred, &mut hsv, imgproc::COLOR_BGR2HSV, 0)?;

        let mut annotated = blurred.clone();
        let result = detector.detect(&hsv, &mut annotated)?;

        imgproc::put_text(
            &mut annotated,
            result.state.as_str(),
            Point::new(10, 30),
            imgproc::FONT_HERSHEY_SIMPLEX,
            1.0,
            Scalar::new(255.0, 0.0, 0.0, 255.0),
            2,
            imgproc::LINE_8,
            false,
        )?;

        highgui::imshow(WINDOW, &annotated)?;
        if highgui::wait_key(30)? >= 0 {
            break;
        }
    }

    highgui::destroy_all_windows()?;
    Ok(())
}
