use egui::{Context, PointerButton, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the display label's origin
    pub position: Pos2,
    /// Whether the pointer was over the display label
    pub is_in_label: bool,
}

/// Pointer events delivered to the editor
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove { location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> &InputLocation {
        match self {
            InputEvent::PointerDown { location, .. }
            | InputEvent::PointerUp { location, .. }
            | InputEvent::PointerMove { location } => location,
        }
    }
}

/// Handles converting raw egui input into label-relative InputEvents
pub struct InputHandler {
    /// Full label rect; its origin anchors label-relative positions
    label_rect: Rect,
    /// The part of the label left visible by the scroll area's clip
    visible_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(label_rect: Rect) -> Self {
        Self {
            label_rect,
            visible_rect: label_rect,
        }
    }

    /// Update the label rectangle after layout. `clip_rect` is the viewport
    /// the label is drawn in; pointer events outside it never reach the label.
    pub fn set_label_rect(&mut self, rect: Rect, clip_rect: Rect) {
        self.label_rect = rect;
        self.visible_rect = rect.intersect(clip_rect);
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.label_rect.min).to_pos2(),
            is_in_label: self.visible_rect.contains(pos),
        }
    }

    /// Translate a single raw egui event. Non-pointer events yield `None`.
    pub fn translate(&self, event: &egui::Event) -> Option<InputEvent> {
        match event {
            egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                location: self.make_location(*pos),
            }),
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let location = self.make_location(*pos);
                Some(if *pressed {
                    InputEvent::PointerDown {
                        location,
                        button: *button,
                    }
                } else {
                    InputEvent::PointerUp {
                        location,
                        button: *button,
                    }
                })
            }
            _ => None,
        }
    }

    /// Collect this frame's pointer events in arrival order
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            input
                .raw
                .events
                .iter()
                .filter_map(|event| self.translate(event))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(10.0, 50.0), vec2(100.0, 100.0)))
    }

    #[test]
    fn test_positions_are_label_relative() {
        let event = handler()
            .translate(&egui::Event::PointerMoved(pos2(20.0, 60.0)))
            .unwrap();
        assert_eq!(
            event,
            InputEvent::PointerMove {
                location: InputLocation {
                    position: pos2(10.0, 10.0),
                    is_in_label: true,
                },
            }
        );
    }

    #[test]
    fn test_button_events() {
        let handler = handler();
        let press = egui::Event::PointerButton {
            pos: pos2(5.0, 5.0),
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        match handler.translate(&press) {
            Some(InputEvent::PointerDown { location, button }) => {
                assert_eq!(button, PointerButton::Secondary);
                assert_eq!(location.position, pos2(-5.0, -45.0));
                assert!(!location.is_in_label);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        let release = egui::Event::PointerButton {
            pos: pos2(15.0, 55.0),
            button: PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert!(matches!(
            handler.translate(&release),
            Some(InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            })
        ));
    }

    #[test]
    fn test_clipped_part_of_label_is_outside() {
        let mut handler = InputHandler::default();
        // A tall label scrolled up by 300 inside a 200 high viewport
        handler.set_label_rect(
            Rect::from_min_size(pos2(10.0, -250.0), vec2(100.0, 1000.0)),
            Rect::from_min_size(pos2(10.0, 50.0), vec2(100.0, 200.0)),
        );

        let hidden = handler
            .translate(&egui::Event::PointerMoved(pos2(20.0, 20.0)))
            .unwrap();
        assert_eq!(hidden.location().position, pos2(10.0, 270.0));
        assert!(!hidden.location().is_in_label);

        let shown = handler
            .translate(&egui::Event::PointerMoved(pos2(20.0, 100.0)))
            .unwrap();
        assert_eq!(shown.location().position, pos2(10.0, 350.0));
        assert!(shown.location().is_in_label);
    }

    #[test]
    fn test_non_pointer_events_are_skipped() {
        assert!(handler().translate(&egui::Event::PointerGone).is_none());
        assert!(handler()
            .translate(&egui::Event::Text("a".to_owned()))
            .is_none());
    }
}
