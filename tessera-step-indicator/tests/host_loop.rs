use tessera_step_indicator::{
    CommandRecorder, Density, MeshCanvas, PxSize, StepIndicator, StepIndicatorDefaults,
    StepIndicatorStyle, StepStrokeCap,
};

const BOUNDS: PxSize = PxSize::new(300.0, 300.0);

/// Renders only when the indicator asked for it, like a host draw callback.
fn frame(indicator: &mut StepIndicator) -> Option<CommandRecorder> {
    if !indicator.take_redraw_request() {
        return None;
    }
    let mut recorder = CommandRecorder::new();
    indicator.render(&mut recorder, BOUNDS);
    Some(recorder)
}

#[test]
fn delayed_update_redraws_with_new_counts() {
    let mut indicator = StepIndicator::default();

    let initial = frame(&mut indicator).expect("first frame");
    assert_eq!(initial.commands().len(), 12);
    assert!(frame(&mut indicator).is_none());

    indicator.set_data(10, 5, 3);
    let updated = frame(&mut indicator).expect("frame after update");
    let colors: Vec<_> = updated.commands().iter().map(|c| c.paint.color).collect();

    assert_eq!(colors.len(), 10);
    assert!(colors[..5].iter().all(|c| *c == StepIndicatorDefaults::SUCCESS_COLOR));
    assert!(colors[5..8].iter().all(|c| *c == StepIndicatorDefaults::FAILED_COLOR));
    assert!(colors[8..].iter().all(|c| *c == StepIndicatorDefaults::PENDING_COLOR));

    let sweep = indicator.arc_width_degrees(BOUNDS);
    assert!((sweep - 35.2).abs() < 1e-4);
}

#[test]
fn last_update_wins_within_a_frame() {
    let mut indicator = StepIndicator::default();
    frame(&mut indicator);

    indicator.set_data(6, 0, 0);
    indicator.set_data(8, 8, 0);
    let recorder = frame(&mut indicator).expect("coalesced frame");

    assert_eq!(recorder.commands().len(), 8);
    assert!(
        recorder
            .commands()
            .iter()
            .all(|c| c.paint.color == StepIndicatorDefaults::SUCCESS_COLOR)
    );
}

#[test]
fn mesh_and_recorder_agree_on_arc_count() {
    let style = StepIndicatorStyle::default().stroke_cap(StepStrokeCap::Round);
    let mut indicator = StepIndicator::new(style, Density::new(1.5));
    indicator.set_data(9, 3, 2);

    let mut recorder = CommandRecorder::new();
    indicator.render(&mut recorder, BOUNDS);

    let mut canvas = MeshCanvas::new();
    indicator.render(&mut canvas, BOUNDS);
    let mesh = canvas.finish().expect("tessellation");

    assert_eq!(mesh.arc_count, recorder.commands().len());
    assert!(recorder.commands().iter().all(|c| c.paint.stroke_width_px == 15.0));
}

#[cfg(feature = "serde")]
mod config {
    use tessera_step_indicator::{Color, Dp, StepGap, StepIndicatorStyle, StepStrokeCap};

    #[test]
    fn partial_style_falls_back_to_defaults() {
        let style: StepIndicatorStyle = serde_json::from_str(
            r##"{
                "success_color": "#FF00AA00",
                "stroke_cap": "round",
                "gap": { "dp": 2.0 }
            }"##,
        )
        .unwrap();

        assert_eq!(style.success_color, Color::from_argb_u32(0xFF00AA00));
        assert_eq!(style.stroke_cap, StepStrokeCap::Round);
        assert_eq!(style.gap, StepGap::Dp(Dp(2.0)));
        assert_eq!(
            style.pending_color,
            StepIndicatorStyle::default().pending_color
        );
    }

    #[test]
    fn style_serializes_colors_as_hex() {
        let json = serde_json::to_value(StepIndicatorStyle::default()).unwrap();
        assert_eq!(json["success_color"], "#FF67D39D");
        assert_eq!(json["stroke_cap"], "butt");
        assert_eq!(json["gap"]["degrees"].as_f64().map(|v| v as f32), Some(0.8));
    }

    #[test]
    fn rejects_bad_color_strings() {
        let result: Result<StepIndicatorStyle, _> =
            serde_json::from_str(r#"{ "failed_color": "red" }"#);
        assert!(result.is_err());
    }
}
