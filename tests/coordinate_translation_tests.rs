use approx::assert_abs_diff_eq;
use chart_sync::core::{Axis, AxisOrientation, LinearScale, ScaleMode};

fn x_axis(min: f64, max: f64) -> Axis {
    Axis::new(AxisOrientation::Horizontal, ScaleMode::Linear, min, max, 0.0, 1000.0)
        .expect("x axis")
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0).expect("valid scale");

    let value = 42.5;
    let px = scale.domain_to_pixel(value, 1000.0);
    let recovered = scale.pixel_to_domain(px, 1000.0);

    assert_abs_diff_eq!(recovered, value, epsilon = 1e-9);
}

#[test]
fn degenerate_domains_are_rejected() {
    assert!(LinearScale::new(1.0, 1.0).is_err());
    assert!(
        Axis::new(AxisOrientation::Horizontal, ScaleMode::Linear, 5.0, 1.0, 0.0, 100.0).is_err()
    );
    assert!(Axis::new(AxisOrientation::Horizontal, ScaleMode::Log, 0.0, 10.0, 0.0, 100.0).is_err());
    assert!(Axis::new(AxisOrientation::Horizontal, ScaleMode::Linear, 0.0, 1.0, 0.0, 0.0).is_err());
}

#[test]
fn vertical_axis_grows_upwards() {
    let axis = Axis::new(AxisOrientation::Vertical, ScaleMode::Linear, 0.0, 10.0, 20.0, 400.0)
        .expect("y axis");

    assert_abs_diff_eq!(axis.to_pixel(10.0).expect("top"), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.to_pixel(0.0).expect("bottom"), 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.chart_to_value(220.0), 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.to_chart_pixel(5.0).expect("chart px"), 220.0, epsilon = 1e-9);
}

#[test]
fn chart_pixels_remove_plot_offset() {
    let axis = Axis::new(AxisOrientation::Horizontal, ScaleMode::Linear, 0.0, 10.0, 50.0, 900.0)
        .expect("x axis");

    assert_abs_diff_eq!(axis.chart_to_value(50.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.chart_to_value(950.0), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.to_value(450.0), 5.0, epsilon = 1e-9);
}

#[test]
fn out_of_range_pixels_extrapolate() {
    let axis = x_axis(0.0, 10.0);

    assert_abs_diff_eq!(axis.to_value(-100.0), -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.to_value(1500.0), 15.0, epsilon = 1e-9);
}

#[test]
fn zoom_and_pan_drive_translation() {
    let mut axis = x_axis(0.0, 10.0);
    axis.set_extremes(2.0, 4.0).expect("zoom");

    assert_abs_diff_eq!(axis.to_value(0.0), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.to_value(500.0), 3.0, epsilon = 1e-9);

    axis.pan_by_pixels(500.0).expect("pan");
    let (min, max) = axis.visible_extremes();
    assert_abs_diff_eq!(min, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max, 5.0, epsilon = 1e-9);

    axis.reset_extremes().expect("reset");
    assert_eq!(axis.visible_extremes(), axis.full_extremes());
}

#[test]
fn log_axis_is_monotonic_and_round_trips() {
    let axis = Axis::new(AxisOrientation::Horizontal, ScaleMode::Log, 1.0, 1000.0, 0.0, 300.0)
        .expect("log axis");

    assert_abs_diff_eq!(axis.to_pixel(10.0).expect("10"), 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.to_pixel(100.0).expect("100"), 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.to_value(150.0), 10f64.powf(1.5), epsilon = 1e-9);
    assert!(axis.to_pixel(-1.0).is_err());
}
