//! Sketch export through real and mocked sinks

mod common;

use common::builders::CurveBuilder;
use common::mock_helpers::{failing_sink, MockSink, RecordingSink};
use egui::{Pos2, Rect, Vec2};
use motor_curve_studio::export::firmware::PLAYBACK_ROUTINE;
use motor_curve_studio::{
    EditingSession, EditorEvent, ExportNotice, FileSink, FirmwareTable, Point,
};
use tempfile::TempDir;

/// Session with a (0 s, 0 %), (0.5 s, 100 %), (1 s, 50 %) curve
fn three_point_session(epsilon: f32) -> EditingSession {
    let store = CurveBuilder::new()
        .epsilon(epsilon)
        .time_scale(1.0)
        .point(0.0, 0.0)
        .point(0.5, 100.0)
        .point(1.0, 50.0)
        .build();
    let mut session = EditingSession::with_store(store, 1.0);
    session.set_plot_rect(Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 500.0)));
    session
}

#[test]
fn test_export_text_is_deterministic() {
    let session = three_point_session(0.5);
    assert_eq!(session.export_text().unwrap(), session.export_text().unwrap());
}

#[test]
fn test_export_tables_and_quantization() {
    let text = three_point_session(0.5).export_text().unwrap();

    assert!(text.starts_with("#include <avr/pgmspace.h>\n#include <math.h>\n\n"));
    assert!(text.contains("const int NUM_POINTS = 3;\n"));
    assert!(text.contains("const float timePoints[] PROGMEM = {0, 0.5, 1};\n"));
    assert!(text.contains("const uint8_t values[] PROGMEM = {0, 255, 127};\n"));
    assert!(text.ends_with(PLAYBACK_ROUTINE));
}

#[test]
fn test_export_uses_simplified_curve() {
    // A nearly straight ramp collapses to its endpoints at the default tolerance
    let store = CurveBuilder::new()
        .epsilon(0.5)
        .time_scale(1.0)
        .point(0.0, 0.0)
        .point(0.5, 50.1)
        .point(1.0, 100.0)
        .build();
    let session = EditingSession::with_store(store, 1.0);

    let text = session.export_text().unwrap();
    assert!(text.contains("const int NUM_POINTS = 2;"));
    assert!(text.contains("{0, 1};"));
    assert!(text.contains("{0, 255};"));
    assert_eq!(session.budget().simplified, 2);
    assert_eq!(session.budget().points, 3);
}

#[test]
fn test_file_sink_writes_sketch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("motor_curve.ino");
    let mut session = three_point_session(0.5);

    let name = session.export_to(&FileSink, &path).unwrap();

    assert_eq!(name, "motor_curve.ino");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, session.export_text().unwrap());
    assert_eq!(
        session.export_notice(),
        Some(&ExportNotice::Succeeded {
            file_name: "motor_curve.ino".to_string()
        })
    );
}

#[test]
fn test_file_sink_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("motor_curve.ino");
    std::fs::write(&path, "stale contents that are longer than nothing").unwrap();

    let mut session = three_point_session(0.5);
    session.export_to(&FileSink, &path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        session.export_text().unwrap()
    );
}

#[test]
fn test_file_sink_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("motor_curve.ino");
    let mut session = three_point_session(0.5);

    let err = session.export_to(&FileSink, &path).unwrap_err();
    assert!(err.to_string().contains("Failed to write sketch"));
    assert!(matches!(
        session.export_notice(),
        Some(ExportNotice::Failed { .. })
    ));
}

#[test]
fn test_failing_sink_raises_failed_notice_for_three_seconds() {
    let mut session = three_point_session(0.5);
    let sink = failing_sink();

    assert!(session
        .export_to(&sink, std::path::Path::new("motor_curve.ino"))
        .is_err());
    match session.export_notice() {
        Some(ExportNotice::Failed { reason }) => assert!(reason.contains("read-only")),
        other => panic!("expected a failure notice, got {:?}", other),
    }

    session.tick(2.9);
    assert!(session.export_notice().is_some());
    session.tick(0.2);
    assert!(session.export_notice().is_none());
}

#[test]
fn test_empty_curve_writes_nothing() {
    let mut session = EditingSession::new(1.0, 0.5);
    let mut sink = MockSink::new();
    sink.expect_write().never();

    assert!(session
        .export_to(&sink, std::path::Path::new("motor_curve.ino"))
        .is_err());
    assert!(session.export_notice().is_none());
}

#[test]
fn test_recording_sink_receives_each_export() {
    let mut session = three_point_session(0.0);
    let sink = RecordingSink::default();

    session
        .export_to(&sink, std::path::Path::new("a.ino"))
        .unwrap();
    session.handle(EditorEvent::Reset);
    session.handle(EditorEvent::PointerPressed(Pos2::new(500.0, 250.0)));
    session
        .export_to(&sink, std::path::Path::new("b.ino"))
        .unwrap();

    let writes = sink.writes.borrow();
    assert_eq!(writes.len(), 2);
    assert!(writes[0].1.contains("NUM_POINTS = 3;"));
    assert!(writes[1].1.contains("NUM_POINTS = 1;"));
    assert!(writes[1].1.contains("{0.5};"));
}

#[test]
fn test_playback_reproduces_the_curve() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(0.5, 100.0),
        Point::new(1.0, 50.0),
    ];
    let table = FirmwareTable::from_points(&points).unwrap();

    common::assert_float_eq(table.sample(0.25), 127.5, 1e-3);
    common::assert_float_eq(table.sample(0.75), 191.0, 1e-3);
    // One second in, playback has wrapped back to the start
    common::assert_float_eq(table.sample(1.25), 127.5, 1e-3);
}
