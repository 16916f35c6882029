use std::path::Path;

use egui::{PointerButton, Pos2};
use image::RgbaImage;

use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::error::LoadError;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::input::InputEvent;
use crate::state::{EditorState, PointerState};
use crate::stroke::Pen;

/// Owns the canvas and the pointer state, and reacts to pointer events.
///
/// Handlers never fail: events that don't apply (no image loaded, pointer
/// outside the pixmap) are dropped without touching any state.
#[derive(Debug)]
pub struct Editor {
    canvas: Option<Canvas>,
    pointer: PointerState,
    draw_pen: Pen,
    erase_pen: Pen,
    /// Largest width or height a loaded image may have
    max_image_side: Option<usize>,
    events: EventBus,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            canvas: None,
            pointer: PointerState::Idle,
            draw_pen: config.draw_pen,
            erase_pen: config.erase_pen,
            max_image_side: None,
            events: EventBus::new(),
        }
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn state(&self) -> EditorState {
        EditorState::new(self.canvas.is_some(), &self.pointer)
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// Reject images wider or taller than `side` on later loads.
    pub fn set_max_image_side(&mut self, side: usize) {
        self.max_image_side = Some(side);
    }

    /// Read and decode `path`, replacing the canvas on success.
    ///
    /// On error the current canvas is left as it was.
    pub fn load_path(&mut self, path: &Path) -> Result<(), LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let canvas = Canvas::from_bytes(&bytes)?;
        if let Some(max_side) = self.max_image_side {
            let (width, height) = (canvas.width(), canvas.height());
            if width.max(height) as usize > max_side {
                return Err(LoadError::TooLarge {
                    width,
                    height,
                    max_side,
                });
            }
        }
        log::info!(
            "Loaded image {}: {}x{}",
            path.display(),
            canvas.width(),
            canvas.height()
        );
        self.replace_canvas(canvas, Some(path));
        Ok(())
    }

    /// Replace the canvas with an already decoded image.
    pub fn set_image(&mut self, image: RgbaImage) {
        self.replace_canvas(Canvas::new(image), None);
    }

    fn replace_canvas(&mut self, canvas: Canvas, path: Option<&Path>) {
        let (width, height) = (canvas.width(), canvas.height());
        self.canvas = Some(canvas);
        self.events.emit(EditorEvent::ImageLoaded {
            path: path.map(Path::to_path_buf),
            width,
            height,
        });
    }

    /// Dispatch a single pointer event. Returns true if the canvas changed.
    ///
    /// Presses and moves outside the visible label are dropped; releases
    /// count wherever they happen.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let in_label = event.location().is_in_label;
        match event {
            InputEvent::PointerDown { .. } | InputEvent::PointerMove { .. } if !in_label => false,
            InputEvent::PointerDown { location, button } => {
                self.on_pointer_down(location.position, *button);
                false
            }
            InputEvent::PointerMove { location } => self.on_pointer_move(location.position),
            InputEvent::PointerUp { button, .. } => {
                self.on_pointer_up(*button);
                false
            }
        }
    }

    pub fn on_pointer_down(&mut self, pos: Pos2, button: PointerButton) {
        let Some(canvas) = &self.canvas else {
            return;
        };
        if !canvas.contains(pos) {
            log::debug!("Ignoring press outside the image at {:?}", pos);
            return;
        }

        match button {
            PointerButton::Primary => {
                self.pointer = PointerState::Drawing { last: pos };
                self.events.emit(EditorEvent::DrawingStarted { at: pos });
            }
            PointerButton::Secondary => {
                self.pointer = PointerState::Erasing { last: pos };
                self.events.emit(EditorEvent::ErasingStarted { at: pos });
            }
            _ => return,
        }
        log::debug!("{} from {:?}", self.pointer.name(), pos);
    }

    pub fn on_pointer_move(&mut self, pos: Pos2) -> bool {
        let pen = match self.pointer {
            PointerState::Idle => return false,
            PointerState::Drawing { .. } => self.draw_pen,
            PointerState::Erasing { .. } => self.erase_pen,
        };
        let (Some(canvas), Some(last)) = (&mut self.canvas, self.pointer.last_point()) else {
            return false;
        };
        if !canvas.contains(pos) {
            return false;
        }

        canvas.draw_line(last, pos, &pen);
        let version = canvas.version();
        self.pointer.set_last_point(pos);
        self.events.emit(EditorEvent::CanvasChanged { version });
        true
    }

    pub fn on_pointer_up(&mut self, button: PointerButton) {
        if !matches!(button, PointerButton::Primary | PointerButton::Secondary) {
            return;
        }
        let was_active = self.pointer != PointerState::Idle;
        self.pointer = PointerState::Idle;
        if was_active {
            self.events.emit(EditorEvent::StrokeEnded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputLocation;
    use egui::pos2;
    use image::Rgba;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn editor_with_image() -> Editor {
        let mut editor = Editor::new(&EditorConfig::default());
        editor.set_image(RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255])));
        editor
    }

    #[test]
    fn test_other_button_press_switches_mode() {
        let mut editor = editor_with_image();
        editor.on_pointer_down(pos2(5.0, 5.0), PointerButton::Primary);
        assert_eq!(editor.state(), EditorState::Drawing);

        editor.on_pointer_down(pos2(6.0, 6.0), PointerButton::Secondary);
        assert_eq!(editor.state(), EditorState::Erasing);
        assert_eq!(editor.pointer().last_point(), Some(pos2(6.0, 6.0)));
    }

    #[test]
    fn test_middle_button_is_ignored() {
        let mut editor = editor_with_image();
        editor.on_pointer_down(pos2(5.0, 5.0), PointerButton::Middle);
        assert_eq!(editor.state(), EditorState::Ready);

        editor.on_pointer_down(pos2(5.0, 5.0), PointerButton::Primary);
        editor.on_pointer_up(PointerButton::Middle);
        assert_eq!(editor.state(), EditorState::Drawing);
    }

    #[test]
    fn test_events_outside_visible_label_are_dropped() {
        let mut editor = editor_with_image();
        let hidden = InputLocation {
            position: pos2(10.0, 10.0),
            is_in_label: false,
        };
        let shown = InputLocation {
            is_in_label: true,
            ..hidden
        };

        editor.handle_event(&InputEvent::PointerDown {
            location: hidden,
            button: PointerButton::Primary,
        });
        assert_eq!(editor.state(), EditorState::Ready);

        editor.handle_event(&InputEvent::PointerDown {
            location: shown,
            button: PointerButton::Primary,
        });
        let moved = InputLocation {
            position: pos2(20.0, 20.0),
            is_in_label: false,
        };
        assert!(!editor.handle_event(&InputEvent::PointerMove { location: moved }));
        assert_eq!(editor.state(), EditorState::Drawing);
        assert_eq!(editor.canvas().unwrap().version(), 0);

        // Releasing outside the label still ends the stroke
        editor.handle_event(&InputEvent::PointerUp {
            location: moved,
            button: PointerButton::Primary,
        });
        assert_eq!(editor.state(), EditorState::Ready);
    }

    #[test]
    fn test_move_while_idle_does_nothing() {
        let mut editor = editor_with_image();
        assert!(!editor.on_pointer_move(pos2(10.0, 10.0)));
        assert_eq!(editor.canvas().unwrap().version(), 0);
    }

    #[test]
    fn test_load_replaces_canvas_and_keeps_pointer_state() {
        let mut editor = editor_with_image();
        editor.on_pointer_down(pos2(5.0, 5.0), PointerButton::Primary);
        editor.set_image(RgbaImage::from_pixel(20, 10, Rgba([9, 9, 9, 255])));

        let canvas = editor.canvas().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (20, 10));
        assert_eq!(canvas.version(), 0);
        assert_eq!(editor.state(), EditorState::Drawing);
    }

    #[test]
    fn test_events_are_emitted_in_order() {
        let mut editor = Editor::new(&EditorConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        editor.subscribe(Box::new(move |event: &EditorEvent| {
            sink.borrow_mut().push(event.clone());
        }));

        editor.set_image(RgbaImage::new(40, 40));
        editor.on_pointer_down(pos2(1.0, 1.0), PointerButton::Primary);
        editor.on_pointer_move(pos2(8.0, 1.0));
        editor.on_pointer_up(PointerButton::Primary);
        // A second release has nothing to end
        editor.on_pointer_up(PointerButton::Primary);

        assert_eq!(
            *seen.borrow(),
            vec![
                EditorEvent::ImageLoaded {
                    path: None,
                    width: 40,
                    height: 40,
                },
                EditorEvent::DrawingStarted { at: pos2(1.0, 1.0) },
                EditorEvent::CanvasChanged { version: 1 },
                EditorEvent::StrokeEnded,
            ]
        );
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let mut editor = editor_with_image();
        let result = editor.load_path(Path::new("/nonexistent/surely/missing.png"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
        assert_eq!(editor.canvas().unwrap().width(), 50);
    }
}
