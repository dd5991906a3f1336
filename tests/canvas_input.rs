use egui::{Pos2, pos2};
use vector_paint::PaintApp;
use vector_paint::element::Shape;
use vector_paint::tools::ToolKind;

fn click(app: &mut PaintApp, at: Pos2, time: f64) {
    app.pointer_pressed(at, time);
    app.pointer_released(at);
}

#[test]
fn test_double_click_finishes_polygon_without_extra_vertex() {
    let mut app = PaintApp::default();
    app.editor_mut().set_tool(ToolKind::Polygon);

    click(&mut app, pos2(0.0, 0.0), 0.0);
    click(&mut app, pos2(30.0, 0.0), 1.0);
    click(&mut app, pos2(15.0, 20.0), 2.0);
    click(&mut app, pos2(15.0, 20.0), 2.1);

    let scene = app.editor().scene();
    assert_eq!(scene.len(), 1);
    match scene.shapes().next() {
        Some(Shape::Polygon(polygon)) => assert_eq!(polygon.vertices().len(), 3),
        other => panic!("expected a polygon, got {other:?}"),
    }
    assert_eq!(app.editor().history().undo_depth(), 1);
}

#[test]
fn test_double_click_with_drag_tool_commits_once() {
    let mut app = PaintApp::default();
    app.editor_mut().set_tool(ToolKind::Line);

    click(&mut app, pos2(5.0, 5.0), 0.0);
    click(&mut app, pos2(6.0, 5.0), 0.2);

    assert_eq!(app.editor().scene().len(), 1);
    assert_eq!(app.editor().history().undo_depth(), 1);
}

#[test]
fn test_slow_or_distant_presses_are_separate_clicks() {
    let mut app = PaintApp::default();
    app.editor_mut().set_tool(ToolKind::Line);

    click(&mut app, pos2(5.0, 5.0), 0.0);
    click(&mut app, pos2(100.0, 5.0), 1.0);
    click(&mut app, pos2(200.0, 5.0), 1.1);
    assert_eq!(app.editor().scene().len(), 3);
}

#[test]
fn test_third_press_starts_a_new_gesture() {
    let mut app = PaintApp::default();
    app.editor_mut().set_tool(ToolKind::Line);

    click(&mut app, pos2(5.0, 5.0), 0.0);
    click(&mut app, pos2(5.0, 5.0), 0.1);
    click(&mut app, pos2(50.0, 50.0), 0.2);
    assert_eq!(app.editor().scene().len(), 2);
}

#[test]
fn test_double_click_with_text_tool_opens_prompt() {
    let mut app = PaintApp::default();
    app.editor_mut().set_tool(ToolKind::Text);

    click(&mut app, pos2(40.0, 40.0), 0.0);
    assert!(!app.is_prompting());
    click(&mut app, pos2(40.0, 40.0), 0.15);
    assert!(app.is_prompting());
}
