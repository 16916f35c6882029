use egui::Pos2;

/// Transient pointer state of the editor.
///
/// Drawing and erasing are variants of one enum, so at most one of them can
/// be active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Drawing {
        last: Pos2,
    },
    Erasing {
        last: Pos2,
    },
}

impl PointerState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn is_erasing(&self) -> bool {
        matches!(self, Self::Erasing { .. })
    }

    pub fn last_point(&self) -> Option<Pos2> {
        match self {
            Self::Idle => None,
            Self::Drawing { last } | Self::Erasing { last } => Some(*last),
        }
    }

    pub fn set_last_point(&mut self, pos: Pos2) {
        if let Self::Drawing { last } | Self::Erasing { last } = self {
            *last = pos;
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
            Self::Erasing { .. } => "Erasing",
        }
    }
}

/// Observable state of the editor window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    NoImage,
    Ready,
    Drawing,
    Erasing,
}

impl EditorState {
    pub fn new(has_image: bool, pointer: &PointerState) -> Self {
        match (has_image, pointer) {
            (false, _) => Self::NoImage,
            (true, PointerState::Idle) => Self::Ready,
            (true, PointerState::Drawing { .. }) => Self::Drawing,
            (true, PointerState::Erasing { .. }) => Self::Erasing,
        }
    }
}
