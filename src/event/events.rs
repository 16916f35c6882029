use std::path::PathBuf;

use egui::Pos2;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ImageLoaded {
        path: Option<PathBuf>,
        width: u32,
        height: u32,
    },
    DrawingStarted {
        at: Pos2,
    },
    ErasingStarted {
        at: Pos2,
    },
    /// A segment was painted; the label must re-render.
    CanvasChanged {
        version: u64,
    },
    StrokeEnded,
}
