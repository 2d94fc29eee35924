use std::sync::Arc;

use eframe::{egui_glow, glow};
use egui::mutex::Mutex;
use thiserror::Error;

use crate::{
    controls::{Parameter, ParameterControl},
    projection::Viewport,
    renderer::{Renderer, RendererError},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No OpenGL context; the viewer requires the glow renderer.")]
    NoGlContext,

    #[error(transparent)]
    Renderer(#[from] RendererError),
}

pub struct WaveViewerApp {
    renderer: Arc<Mutex<Renderer<glow::Context>>>,
    controls: [ParameterControl; 3],
}

impl WaveViewerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, AppError> {
        let gl = cc.gl.as_ref().ok_or(AppError::NoGlContext)?;

        let controls = Parameter::ALL.map(ParameterControl::new);
        let mut renderer: Renderer<glow::Context> = Renderer::default();
        for control in &controls {
            control.apply(renderer.wave_mut());
        }

        let ctx = cc.egui_ctx.clone();
        renderer.set_repaint_hook(move || ctx.request_repaint());
        renderer.initialize(gl)?;

        Ok(Self {
            renderer: Arc::new(Mutex::new(renderer)),
            controls,
        })
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui, gl: Option<&Arc<glow::Context>>) {
        egui::Grid::new("wave_controls")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for control in &mut self.controls {
                    let range = control.parameter().slider_range();
                    let response = ui.add(
                        egui::Slider::new(control.value_mut(), range)
                            .show_value(false)
                            .integer(),
                    );
                    ui.label(control.label());
                    ui.end_row();

                    if response.changed() {
                        let mut renderer = self.renderer.lock();
                        match gl {
                            Some(gl) => {
                                if let Err(err) = renderer.set_parameter(gl, control.parameter(), control.radians()) {
                                    log::error!("Failed to refresh wave buffer: {err}");
                                }
                            }
                            None => control.apply(renderer.wave_mut()),
                        }
                    }
                }
            });

        if ui.button("Dump buffer").clicked() {
            if let Some(gl) = gl {
                if let Err(err) = self.renderer.lock().dump_buffer_contents(gl) {
                    log::error!("{err}");
                }
            }
        }
    }

    fn plot_ui(&self, ui: &mut egui::Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

        let renderer = Arc::clone(&self.renderer);
        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |info, painter| {
                let gl: &glow::Context = painter.gl();
                let pixels = info.viewport_in_pixels();
                let viewport = Viewport {
                    x: pixels.left_px,
                    y: pixels.from_bottom_px,
                    width: pixels.width_px,
                    height: pixels.height_px,
                };

                let mut renderer = renderer.lock();
                if renderer.viewport() != viewport {
                    if let Err(err) = renderer.set_viewport(gl, viewport) {
                        log::error!("Failed to resize: {err}");
                    }
                }
                if let Err(err) = renderer.draw(gl) {
                    log::error!("Failed to draw wave: {err}");
                }
            })),
        };
        ui.painter().add(callback);
    }
}

impl eframe::App for WaveViewerApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let gl = frame.gl().cloned();

        egui::TopBottomPanel::bottom("controls_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            self.controls_ui(ui, gl.as_ref());
            ui.add_space(8.0);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.plot_ui(ui));
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.renderer.lock().dispose(gl);
        }
    }
}
