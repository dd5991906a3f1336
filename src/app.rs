use egui::{Key, Modifiers, Pos2};
use log::{debug, error, info};

use crate::config::EditorConfig;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::{Action, EditorContext};

const DEFAULT_DRAWING_PATH: &str = "drawing.json";

/// Two presses closer than this in time (seconds) form a double-click.
const DOUBLE_CLICK_DELAY: f64 = 0.3;

/// Largest distance in canvas pixels between the two presses of a double-click.
const DOUBLE_CLICK_DISTANCE: f32 = 6.0;

/// Text entry shown after a Text tool double-click
#[derive(Debug)]
struct TextPrompt {
    at: Pos2,
    buffer: String,
}

#[derive(Debug)]
pub struct PaintApp {
    editor: EditorContext,
    renderer: Renderer,
    file_path: String,
    status: Option<String>,
    text_prompt: Option<TextPrompt>,
    /// A press started on the canvas and has not been released yet
    pointer_held: bool,
    /// Time and position of the last press that went to the editor
    last_press: Option<(f64, Pos2)>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous settings (if any).
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorConfig>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            renderer: Renderer::new(config.selection_extra_width),
            editor: EditorContext::new(config),
            file_path: DEFAULT_DRAWING_PATH.to_owned(),
            status: None,
            text_prompt: None,
            pointer_held: false,
            last_press: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn file_path_mut(&mut self) -> &mut String {
        &mut self.file_path
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_prompting(&self) -> bool {
        self.text_prompt.is_some()
    }

    /// Primary button went down on the canvas at `time` seconds.
    ///
    /// The second press of a double-click is a double-click event only, it never
    /// starts a gesture of its own.
    pub fn pointer_pressed(&mut self, pos: Pos2, time: f64) {
        let double = self.last_press.is_some_and(|(last_time, last_pos)| {
            time - last_time <= DOUBLE_CLICK_DELAY && last_pos.distance(pos) <= DOUBLE_CLICK_DISTANCE
        });
        let actions = if double {
            self.last_press = None;
            self.editor.on_double_click(pos)
        } else {
            self.last_press = Some((time, pos));
            self.pointer_held = true;
            self.editor.on_pointer_down(pos)
        };
        self.apply(actions);
    }

    pub fn pointer_moved(&mut self, pos: Pos2) {
        if self.pointer_held {
            let actions = self.editor.on_pointer_move(pos);
            self.apply(actions);
        }
    }

    pub fn pointer_released(&mut self, pos: Pos2) {
        if self.pointer_held {
            self.pointer_held = false;
            let actions = self.editor.on_pointer_up(pos);
            self.apply(actions);
        }
    }

    /// React to what the editor reports back from an event.
    pub fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::TextPromptRequested { at } => {
                    self.text_prompt = Some(TextPrompt {
                        at,
                        buffer: String::new(),
                    });
                }
                Action::ShapeCommitted(id) => debug!("Committed shape {id}"),
                Action::ShapeDeleted(id) => debug!("Deleted shape {id}"),
                Action::SelectionChanged(selection) => debug!("Selection: {selection:?}"),
                // egui repaints after every input event
                Action::RenderNeeded => {}
            }
        }
    }

    pub fn save_drawing(&mut self) {
        match self.editor.save(&self.file_path) {
            Ok(()) => self.status = Some(format!("Saved {}", self.file_path)),
            Err(err) => {
                error!("Failed to save {}: {err}", self.file_path);
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    pub fn open_drawing(&mut self) {
        match self.editor.load(&self.file_path) {
            Ok(actions) => {
                self.apply(actions);
                self.status = Some(format!("Opened {}", self.file_path));
            }
            Err(err) => {
                error!("Failed to open {}: {err}", self.file_path);
                self.status = Some(format!("Open failed: {err}"));
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (undo, redo, delete) = ctx.input_mut(|i| {
            (
                i.consume_key(Modifiers::COMMAND, Key::Z),
                i.consume_key(Modifiers::COMMAND, Key::Y),
                i.consume_key(Modifiers::NONE, Key::Delete),
            )
        });
        if undo {
            let actions = self.editor.undo();
            self.apply(actions);
        }
        if redo {
            let actions = self.editor.redo();
            self.apply(actions);
        }
        if delete {
            let actions = self.editor.delete_selected();
            self.apply(actions);
        }
    }

    fn text_prompt_window(&mut self, ctx: &egui::Context) {
        let Some(prompt) = &mut self.text_prompt else {
            return;
        };

        let mut answer: Option<Option<String>> = None;
        egui::Window::new("Enter text")
            .collapsible(false)
            .resizable(false)
            .default_pos(prompt.at)
            .show(ctx, |ui| {
                let edit = ui.text_edit_singleline(&mut prompt.buffer);
                let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                edit.request_focus();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        answer = Some(Some(prompt.buffer.clone()));
                    }
                    if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(Key::Escape)) {
                        answer = Some(None);
                    }
                });
            });

        if let Some(result) = answer {
            self.text_prompt = None;
            let actions = self.editor.on_text_prompt(result);
            self.apply(actions);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        info!("Persisting editor settings");
        eframe::set_value(storage, eframe::APP_KEY, &self.editor.current_config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.is_prompting() {
            self.handle_shortcuts(ctx);
        }
        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.text_prompt_window(ctx);
    }
}
