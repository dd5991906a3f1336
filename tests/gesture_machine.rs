use egui::{Pos2, pos2};
use vector_paint::config::EditorConfig;
use vector_paint::element::{Element, Paint, Shape};
use vector_paint::state::{Action, DragMode, EditorContext, EditorState};
use vector_paint::tools::ToolKind;

fn drag(editor: &mut EditorContext, from: Pos2, to: Pos2) -> Vec<Action> {
    let mut actions = editor.on_pointer_down(from);
    actions.extend(editor.on_pointer_move(to));
    actions.extend(editor.on_pointer_up(to));
    actions
}

fn click(editor: &mut EditorContext, at: Pos2) -> Vec<Action> {
    let mut actions = editor.on_pointer_down(at);
    actions.extend(editor.on_pointer_up(at));
    actions
}

fn first_shape(editor: &EditorContext) -> Shape {
    editor.scene().snapshot().shapes()[0].clone()
}

/// An editor holding a 40x30 rectangle at the origin, Rectangle tool armed
fn editor_with_rectangle() -> EditorContext {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Rectangle);
    drag(&mut editor, pos2(0.0, 0.0), pos2(40.0, 30.0));
    assert_eq!(editor.scene().len(), 1);
    editor
}

#[test]
fn test_default_tool_is_line() {
    let editor = EditorContext::default();
    assert_eq!(editor.tool(), Some(ToolKind::Line));
    assert_eq!(editor.state(), &EditorState::ToolArmed(ToolKind::Line));
}

#[test]
fn test_undo_redo_inverse_law() {
    let mut editor = EditorContext::default();
    let mut snapshots = vec![editor.scene().snapshot()];

    editor.set_tool(ToolKind::Rectangle);
    drag(&mut editor, pos2(0.0, 0.0), pos2(40.0, 30.0));
    snapshots.push(editor.scene().snapshot());

    editor.set_tool(ToolKind::Oval);
    drag(&mut editor, pos2(100.0, 0.0), pos2(140.0, 30.0));
    snapshots.push(editor.scene().snapshot());

    editor.set_tool(ToolKind::Line);
    drag(&mut editor, pos2(0.0, 100.0), pos2(50.0, 100.0));
    snapshots.push(editor.scene().snapshot());

    click(&mut editor, pos2(0.0, 15.0));
    assert!(editor.selection().is_some());
    editor.delete_selected();
    snapshots.push(editor.scene().snapshot());

    editor.clear_all();
    snapshots.push(editor.scene().snapshot());
    assert_eq!(editor.history().undo_depth(), 5);

    for expected in snapshots.iter().rev().skip(1) {
        editor.undo();
        assert_eq!(&editor.scene().snapshot(), expected);
    }
    assert!(editor.undo().is_empty());

    for expected in snapshots.iter().skip(1) {
        editor.redo();
        assert_eq!(&editor.scene().snapshot(), expected);
    }
}

#[test]
fn test_redo_invalidated_by_new_mutation() {
    let mut editor = editor_with_rectangle();
    editor.undo();
    assert!(editor.history().can_redo());

    drag(&mut editor, pos2(100.0, 100.0), pos2(120.0, 120.0));
    assert!(!editor.history().can_redo());

    let before = editor.scene().snapshot();
    assert!(editor.redo().is_empty());
    assert_eq!(editor.scene().snapshot(), before);
}

#[test]
fn test_polygon_needs_three_vertices() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Polygon);

    click(&mut editor, pos2(0.0, 0.0));
    click(&mut editor, pos2(40.0, 0.0));
    assert_eq!(editor.state(), &EditorState::Dragging(DragMode::PolygonBuilding));

    assert!(editor.on_double_click(pos2(40.0, 0.0)).is_empty());
    assert!(editor.scene().is_empty());
    assert_eq!(editor.history().undo_depth(), 0);
    // The vertices are kept so the polygon can still be finished
    assert_eq!(editor.scene().polygon_vertices().len(), 2);

    click(&mut editor, pos2(20.0, 30.0));
    let actions = editor.on_double_click(pos2(20.0, 30.0));
    assert!(actions.iter().any(|a| matches!(a, Action::ShapeCommitted(_))));
    assert_eq!(
        first_shape(&editor).coords(),
        vec![0.0, 0.0, 40.0, 0.0, 20.0, 30.0]
    );
    assert!(editor.scene().polygon_vertices().is_empty());
    assert_eq!(editor.state(), &EditorState::ToolArmed(ToolKind::Polygon));
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn test_polygon_press_never_selects() {
    let mut editor = editor_with_rectangle();
    editor.set_tool(ToolKind::Polygon);

    click(&mut editor, pos2(0.0, 15.0));
    assert_eq!(editor.selection(), None);
    assert_eq!(editor.scene().polygon_vertices(), &[pos2(0.0, 15.0)]);
}

#[test]
fn test_polygon_vertices_render_as_markers() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Polygon);
    click(&mut editor, pos2(10.0, 10.0));
    click(&mut editor, pos2(50.0, 10.0));

    let items = editor.render_list();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.is_preview && !item.is_selected));
    let marker = items[0].shape.as_ref();
    assert!(matches!(marker, Shape::Oval(_)));
    assert_eq!(marker.coords(), vec![7.0, 7.0, 13.0, 13.0]);
    assert_eq!(marker.fill(), Paint::BLACK);
}

#[test]
fn test_switching_tool_discards_polygon() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Polygon);
    click(&mut editor, pos2(0.0, 0.0));
    click(&mut editor, pos2(40.0, 0.0));

    editor.set_tool(ToolKind::Line);
    assert!(editor.scene().polygon_vertices().is_empty());
    assert_eq!(editor.state(), &EditorState::ToolArmed(ToolKind::Line));
    assert_eq!(editor.history().undo_depth(), 0);
}

#[test]
fn test_line_resampling() {
    let mut editor = EditorContext::default();
    drag(&mut editor, pos2(0.0, 0.0), pos2(10.0, 0.0));

    let expected: Vec<f32> = (0..=10).flat_map(|x| [x as f32, 0.0]).collect();
    assert_eq!(first_shape(&editor).coords(), expected);
}

#[test]
fn test_zero_length_line_commits_one_pixel_segment() {
    let mut editor = EditorContext::default();
    click(&mut editor, pos2(5.0, 5.0));
    assert_eq!(first_shape(&editor).coords(), vec![5.0, 5.0, 6.0, 5.0]);
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn test_circle_radius() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Circle);
    drag(&mut editor, pos2(100.0, 100.0), pos2(103.0, 104.0));

    let circle = first_shape(&editor);
    assert!(matches!(circle, Shape::Oval(_)));
    assert_eq!(circle.coords(), vec![95.0, 95.0, 105.0, 105.0]);
}

#[test]
fn test_zero_radius_circle_adds_nothing() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Circle);
    click(&mut editor, pos2(100.0, 100.0));
    assert!(editor.scene().is_empty());
    assert_eq!(editor.history().undo_depth(), 0);
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut editor = editor_with_rectangle();
    let depth = editor.history().undo_depth();

    assert!(editor.delete_selected().is_empty());
    assert_eq!(editor.history().undo_depth(), depth);
    assert_eq!(editor.scene().len(), 1);
}

#[test]
fn test_delete_selected() {
    let mut editor = editor_with_rectangle();
    let actions = click(&mut editor, pos2(0.0, 15.0));
    let id = editor.selection().unwrap();
    assert!(actions.contains(&Action::SelectionChanged(Some(id))));

    let actions = editor.delete_selected();
    assert!(actions.contains(&Action::ShapeDeleted(id)));
    assert!(editor.scene().is_empty());
    assert_eq!(editor.selection(), None);
    assert_eq!(editor.history().undo_depth(), 2);

    editor.undo();
    assert_eq!(editor.scene().len(), 1);
}

#[test]
fn test_move_records_one_entry_at_release() {
    let mut editor = editor_with_rectangle();
    let original = first_shape(&editor);

    editor.on_pointer_down(pos2(0.0, 15.0));
    assert!(editor.state().moving_shape().is_some());
    editor.on_pointer_move(pos2(5.0, 18.0));
    editor.on_pointer_move(pos2(12.0, 20.0));
    assert_eq!(editor.history().undo_depth(), 1);
    editor.on_pointer_up(pos2(12.0, 20.0));

    assert_eq!(first_shape(&editor).coords(), vec![12.0, 5.0, 52.0, 35.0]);
    assert_eq!(editor.history().undo_depth(), 2);
    assert!(editor.selection().is_some());

    editor.undo();
    assert_eq!(first_shape(&editor), original);
}

#[test]
fn test_press_without_movement_records_nothing() {
    let mut editor = editor_with_rectangle();
    click(&mut editor, pos2(0.0, 15.0));
    assert!(editor.selection().is_some());
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn test_undo_during_drag_commits_move_first() {
    let mut editor = editor_with_rectangle();
    let original = first_shape(&editor);

    editor.on_pointer_down(pos2(0.0, 15.0));
    editor.on_pointer_move(pos2(10.0, 15.0));
    editor.undo();

    assert_eq!(first_shape(&editor), original);
    assert_eq!(editor.history().undo_depth(), 1);
    assert_eq!(editor.state(), &EditorState::ToolArmed(ToolKind::Rectangle));

    // The release that follows has nothing left to finish
    assert!(editor.on_pointer_up(pos2(10.0, 15.0)).is_empty());
}

#[test]
fn test_move_without_press_is_noop() {
    let mut editor = EditorContext::default();
    assert!(editor.on_pointer_move(pos2(10.0, 10.0)).is_empty());
    assert!(editor.on_pointer_up(pos2(10.0, 10.0)).is_empty());
    assert!(editor.scene().is_empty());
}

#[test]
fn test_preview_during_drag() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Oval);
    editor.on_pointer_down(pos2(0.0, 0.0));
    editor.on_pointer_move(pos2(30.0, 20.0));

    let items = editor.render_list();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_preview);
    assert!(editor.scene().is_empty());

    editor.on_pointer_up(pos2(30.0, 20.0));
    let items = editor.render_list();
    assert_eq!(items.len(), 1);
    assert!(!items[0].is_preview);
}

#[test]
fn test_selection_highlight_in_render_list() {
    let mut editor = editor_with_rectangle();
    drag(&mut editor, pos2(100.0, 100.0), pos2(120.0, 120.0));
    click(&mut editor, pos2(0.0, 15.0));

    let flags: Vec<bool> = editor.render_list().iter().map(|item| item.is_selected).collect();
    assert_eq!(flags, vec![true, false]);

    // Pressing on empty canvas clears the selection
    let actions = editor.on_pointer_down(pos2(300.0, 300.0));
    assert!(actions.contains(&Action::SelectionChanged(None)));
    assert_eq!(editor.selection(), None);
}

#[test]
fn test_topmost_shape_is_picked() {
    let mut editor = editor_with_rectangle();
    drag(&mut editor, pos2(-10.0, -10.0), pos2(0.0, 40.0));
    assert_eq!(editor.scene().len(), 2);

    // Both rectangles have an edge along x = 0; the later one is on top
    click(&mut editor, pos2(0.0, 15.0));
    let top = editor.scene().ids()[1];
    assert_eq!(editor.selection(), Some(top));
}

#[test]
fn test_selection_mode_without_tool() {
    let mut editor = editor_with_rectangle();
    editor.clear_tool();
    assert!(editor.state().is_idle());

    assert!(drag(&mut editor, pos2(100.0, 100.0), pos2(150.0, 150.0)).is_empty());
    assert_eq!(editor.scene().len(), 1);

    drag(&mut editor, pos2(0.0, 15.0), pos2(10.0, 15.0));
    assert_eq!(first_shape(&editor).coords(), vec![10.0, 0.0, 50.0, 30.0]);
}

#[test]
fn test_text_prompt_commit() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Text);

    let actions = editor.on_double_click(pos2(50.0, 60.0));
    assert_eq!(actions, vec![Action::TextPromptRequested { at: pos2(50.0, 60.0) }]);
    assert!(editor.state().is_text_pending());

    // Pointer input is ignored while the prompt is open
    assert!(editor.on_pointer_down(pos2(0.0, 0.0)).is_empty());

    let actions = editor.on_text_prompt(Some("hello".to_owned()));
    assert!(actions.iter().any(|a| matches!(a, Action::ShapeCommitted(_))));
    match first_shape(&editor) {
        Shape::Text(text) => {
            assert_eq!(text.content(), "hello");
            assert_eq!(text.anchor(), pos2(50.0, 60.0));
            assert_eq!(text.font().to_string(), "Arial 12");
            assert_eq!(text.color(), Paint::BLACK);
        }
        other => panic!("expected text, got {other:?}"),
    }
    assert_eq!(editor.state(), &EditorState::ToolArmed(ToolKind::Text));
}

#[test]
fn test_text_prompt_cancel_adds_nothing() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Text);

    editor.on_double_click(pos2(50.0, 60.0));
    assert!(editor.on_text_prompt(None).is_empty());

    editor.on_double_click(pos2(50.0, 60.0));
    assert!(editor.on_text_prompt(Some(String::new())).is_empty());

    assert!(editor.scene().is_empty());
    assert_eq!(editor.history().undo_depth(), 0);
}

#[test]
fn test_text_prompt_without_request_is_ignored() {
    let mut editor = EditorContext::default();
    assert!(editor.on_text_prompt(Some("stray".to_owned())).is_empty());
    assert!(editor.scene().is_empty());
}

#[test]
fn test_clear_all() {
    let mut editor = EditorContext::default();
    editor.clear_all();
    assert_eq!(editor.history().undo_depth(), 0);

    let mut editor = editor_with_rectangle();
    editor.clear_all();
    assert!(editor.scene().is_empty());
    assert_eq!(editor.history().undo_depth(), 2);

    editor.undo();
    assert_eq!(editor.scene().len(), 1);
}

#[test]
fn test_clear_all_discards_polygon() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Polygon);
    click(&mut editor, pos2(0.0, 0.0));

    editor.clear_all();
    assert!(editor.scene().polygon_vertices().is_empty());
    assert_eq!(editor.state(), &EditorState::ToolArmed(ToolKind::Polygon));
}

#[test]
fn test_history_depth_is_capped() {
    let config = EditorConfig {
        history_limit: Some(2),
        ..Default::default()
    };
    let mut editor = EditorContext::new(config);
    for i in 0..4 {
        let y = i as f32 * 20.0;
        drag(&mut editor, pos2(0.0, y), pos2(10.0, y));
    }
    assert_eq!(editor.history().undo_depth(), 2);

    editor.undo();
    editor.undo();
    assert!(editor.undo().is_empty());
    assert_eq!(editor.scene().len(), 2);
}

#[test]
fn test_style_setters_apply_to_new_shapes() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Rectangle);
    let red: Paint = "red".parse().unwrap();
    let green: Paint = "#00ff00".parse().unwrap();
    editor.set_stroke_color(red);
    editor.set_fill_color(green);
    editor.set_stroke_width(0);
    assert_eq!(editor.style().width, 1);

    drag(&mut editor, pos2(0.0, 0.0), pos2(10.0, 10.0));
    let rect = first_shape(&editor);
    assert_eq!(rect.stroke(), (red, Some(1)));
    assert_eq!(rect.fill(), green);

    // Setters never touch the history
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn test_current_config_reflects_style() {
    let mut editor = EditorContext::default();
    editor.set_tool(ToolKind::Oval);
    editor.set_stroke_width(7);

    let config = editor.current_config();
    assert_eq!(config.default_tool, Some(ToolKind::Oval));
    assert_eq!(config.stroke_width, 7);

    let restored = EditorContext::new(config);
    assert_eq!(restored.tool(), Some(ToolKind::Oval));
    assert_eq!(restored.style().width, 7);
}
