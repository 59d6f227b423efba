mod app;
mod message;
mod state;
mod widgets;

use std::path::PathBuf;

pub use app::ImageEditorApp;
pub use message::Message;
pub use state::AppState;

use crate::EditorConfig;

/// Open the editor window, optionally with an image already loaded
pub fn run(config: EditorConfig, initial: Option<PathBuf>) -> iced::Result {
    iced::application(
        move || ImageEditorApp::new(config.clone(), initial.clone()),
        ImageEditorApp::update,
        ImageEditorApp::view,
    )
    .title(ImageEditorApp::title)
    .theme(ImageEditorApp::theme)
    .window_size((1100.0, 760.0))
    .run()
}
