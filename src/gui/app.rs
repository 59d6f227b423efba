use std::path::PathBuf;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, slider, text};
use iced::{ContentFit, Element, Length, Task, Theme};
use rfd::AsyncFileDialog;

use super::widgets::{labeled, layout, section};
use super::{AppState, Message};
use crate::{EditorConfig, Operation};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif", "webp"];

pub struct ImageEditorApp {
    state: AppState,
    preview: Option<Handle>,
}

impl ImageEditorApp {
    pub fn new(config: EditorConfig, initial: Option<PathBuf>) -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(config),
            preview: None,
        };
        let task = match initial {
            Some(path) => Task::done(Message::ImageSelected(Some(path))),
            None => Task::none(),
        };
        (app, task)
    }

    pub fn title(&self) -> String {
        match &self.state.current_file {
            Some(path) => format!(
                "Image Editor - {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            ),
            None => "Image Editor".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LoadImage => {
                return Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Load Image")
                        .add_filter("Images", IMAGE_EXTENSIONS)
                        .pick_file(),
                    |handle| Message::ImageSelected(handle.map(|h| h.path().to_path_buf())),
                );
            }
            Message::ImageSelected(Some(path)) => {
                if self.state.load(&path) {
                    self.refresh_preview();
                }
            }
            Message::SaveImage => {
                return Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Save Image")
                        .add_filter("Images", IMAGE_EXTENSIONS)
                        .set_file_name("processed_image.png")
                        .save_file(),
                    |handle| Message::SaveTargetSelected(handle.map(|h| h.path().to_path_buf())),
                );
            }
            Message::SaveTargetSelected(Some(path)) => {
                self.state.save(&path);
            }
            Message::ImageSelected(None) | Message::SaveTargetSelected(None) => {}
            Message::Reset => {
                if self.state.reset() {
                    self.refresh_preview();
                }
            }
            Message::Edit(operation) => {
                if self.state.apply(&operation) {
                    self.refresh_preview();
                }
            }
            Message::BrightnessChanged(value) => self.state.brightness = value,
            Message::ContrastChanged(value) => self.state.contrast = value,
            Message::BlurChanged(value) => self.state.blur = value,
            Message::ScaleChanged(value) => self.state.scale = value,
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sliders = &self.state.processor.config().sliders;
        let file = section(
            "File",
            vec![
                row![
                    button("Load Image").on_press(Message::LoadImage),
                    button("Save Image").on_press(Message::SaveImage),
                    button("Reset").on_press(Message::Reset),
                ]
                .spacing(6)
                .into(),
            ],
        );

        let filters = section(
            "Filters",
            vec![
                edit_button("Grayscale", Operation::Grayscale),
                edit_button("Edges", Operation::Edges),
                labeled(
                    format!("Blur kernel: {}", self.state.blur),
                    slider(1..=sliders.blur_max, self.state.blur, Message::BlurChanged),
                ),
                edit_button("Blur", Operation::Blur(self.state.blur)),
            ],
        );

        let tone = section(
            "Tone",
            vec![
                labeled(
                    format!("Brightness: {}", self.state.brightness),
                    slider(
                        sliders.brightness_min..=sliders.brightness_max,
                        self.state.brightness,
                        Message::BrightnessChanged,
                    ),
                ),
                edit_button(
                    "Apply Brightness",
                    Operation::Brightness(f64::from(self.state.brightness)),
                ),
                labeled(
                    format!("Contrast: {:.1}", self.state.contrast),
                    slider(
                        sliders.contrast_min..=sliders.contrast_max,
                        self.state.contrast,
                        Message::ContrastChanged,
                    )
                    .step(sliders.contrast_step),
                ),
                edit_button(
                    "Apply Contrast",
                    Operation::Contrast(slider_value(self.state.contrast)),
                ),
            ],
        );

        let geometry = section(
            "Geometry",
            vec![
                row![
                    edit_button("Rotate 90", Operation::Rotate(90)),
                    edit_button("Rotate 180", Operation::Rotate(180)),
                    edit_button("Rotate 270", Operation::Rotate(270)),
                ]
                .spacing(6)
                .into(),
                row![
                    edit_button("Flip Horizontal", Operation::Flip("horizontal".to_string())),
                    edit_button("Flip Vertical", Operation::Flip("vertical".to_string())),
                ]
                .spacing(6)
                .into(),
                labeled(
                    format!("Scale: {:.2}", self.state.scale),
                    slider(
                        sliders.scale_min..=sliders.scale_max,
                        self.state.scale,
                        Message::ScaleChanged,
                    )
                    .step(0.05_f32),
                ),
                edit_button("Resize", Operation::Resize(slider_value(self.state.scale))),
            ],
        );

        let status = text(self.state.status.clone().unwrap_or_default());

        let controls = column![file, filters, tone, geometry, status].spacing(12);

        let canvas: Element<'_, Message> = match &self.preview {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => container(text("Load an image to start editing"))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        };

        layout(controls, canvas)
    }

    /// Re-render the processed buffer into the preview handle
    fn refresh_preview(&mut self) {
        self.preview = self.state.processor.get_image().ok().map(|img| {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            Handle::from_rgba(width, height, rgba.into_raw())
        });
    }
}

fn edit_button(label: &'static str, operation: Operation) -> Element<'static, Message> {
    button(label)
        .on_press(Message::Edit(operation))
        .width(Length::Fill)
        .into()
}

/// f32 slider positions carry float noise (0.1 stepping); keep two decimals
fn slider_value(value: f32) -> f64 {
    (f64::from(value) * 100.0).round() / 100.0
}
