use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::event::EditorEvent;
use crate::file_handler;
use crate::input::InputHandler;
use crate::panels::central_panel;
use crate::texture_manager::CanvasTexture;
use crate::theme;

/// The editor window: an open button above a display label showing the canvas.
pub struct DrawerApp {
    pub(crate) config: EditorConfig,
    pub(crate) editor: Editor,
    pub(crate) input: InputHandler,
    pub(crate) texture: CanvasTexture,
}

impl DrawerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        Self::with_context(&cc.egui_ctx, config)
    }

    pub fn with_context(egui_ctx: &egui::Context, config: EditorConfig) -> Self {
        theme::apply(egui_ctx);

        let editor = Editor::new(&config);
        let ctx = egui_ctx.clone();
        editor.subscribe(Box::new(move |event: &EditorEvent| {
            match event {
                EditorEvent::CanvasChanged { .. } | EditorEvent::ImageLoaded { .. } => {
                    ctx.request_repaint();
                }
                EditorEvent::DrawingStarted { .. }
                | EditorEvent::ErasingStarted { .. }
                | EditorEvent::StrokeEnded => {}
            }
            log::trace!("{:?}", event);
        }));

        Self {
            config,
            editor,
            input: InputHandler::default(),
            texture: CanvasTexture::new(),
        }
    }

    /// Show the open dialog and load the chosen file. Cancelling is a no-op.
    pub fn open_image(&mut self, ctx: &egui::Context) {
        let Some(path) = file_handler::pick_image(&self.config) else {
            return;
        };
        if !file_handler::is_image_file(&path, &self.config) {
            log::warn!("Not a supported image file: {}", path.display());
            return;
        }

        self.editor
            .set_max_image_side(ctx.input(|i| i.max_texture_side));
        match self.editor.load_path(&path) {
            Ok(()) => self.texture.invalidate(),
            Err(err) => log::error!("{}", err),
        }
    }

    /// Dispatch this frame's pointer events to the editor, in arrival order
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        for event in self.input.process_input(ctx) {
            self.editor.handle_event(&event);
        }
    }
}

impl eframe::App for DrawerApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        central_panel(self, ctx);
    }
}
