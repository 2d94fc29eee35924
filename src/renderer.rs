use std::f32::consts::TAU;

use thiserror::Error;

use crate::{
    constants::{
        CLEAR_COLOR, DEFAULT_PERIOD_COUNT, DEFAULT_SAMPLE_COUNT, FLOATS_PER_VERTEX, LINE_COLOR,
        LINE_WIDTH, VERTEX_STRIDE,
    },
    controls::Parameter,
    gpu::{Gpu, GpuError, ScopedBinding},
    projection::{PlotFrame, Projection, Viewport},
    wave::WaveModel,
};

const POSITION_ATTRIBUTE: u32 = 0;

const VERTEX_SHADER: &str = r#"#version 330 core
layout(location = 0) in vec2 a_position;
uniform mat4 u_projection;
void main() {
    gl_Position = u_projection * vec4(a_position, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
uniform vec4 u_color;
out vec4 out_color;
void main() {
    out_color = u_color;
}
"#;

/// Interleaved `x, y` floats for the line strip.
///
/// Vertex `j` sits at `x = 2PI * j / sample_count` and takes the `j`th sample
/// value shifted up by the frame's vertical offset. Only the first
/// `sample_count * period_count` samples are used, which spans the frame width.
pub fn build_vertices(
    wave: &WaveModel,
    frame: &PlotFrame,
    sample_count: usize,
    period_count: usize,
) -> Vec<f32> {
    let samples = wave.get_samples(sample_count, period_count);
    let vertex_count = sample_count * period_count;

    samples
        .values()
        .take(vertex_count)
        .enumerate()
        .flat_map(|(j, y)| {
            let x = TAU * j as f32 / sample_count as f32;
            [x, y + frame.vertical_offset]
        })
        .collect()
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RendererError {
    #[error("Cannot {operation}: {detail}.")]
    InvalidState {
        operation: &'static str,
        detail: String,
    },

    #[error(transparent)]
    Gpu(#[from] GpuError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererStateKind {
    Uninitialized,
    Ready,
    Disposed,
}

impl std::fmt::Display for RendererStateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Uninitialized => "Uninitialized",
            Self::Ready => "Ready",
            Self::Disposed => "Disposed",
        })
    }
}

/// GPU handles owned by a ready renderer. Not `Clone`: exactly one owner frees them.
struct GpuResources<G: Gpu> {
    vertex_array: G::VertexArray,
    buffer: G::Buffer,
    program: G::Program,
}

impl<G: Gpu> std::fmt::Debug for GpuResources<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuResources")
            .field("vertex_array", &self.vertex_array)
            .field("buffer", &self.buffer)
            .field("program", &self.program)
            .finish()
    }
}

impl<G: Gpu> GpuResources<G> {
    fn acquire(gpu: &G) -> Result<Self, GpuError> {
        let vertex_array = gpu.create_vertex_array()?;

        let buffer = match gpu.create_buffer() {
            Ok(buffer) => buffer,
            Err(err) => {
                gpu.delete_vertex_array(vertex_array);
                return Err(err);
            }
        };

        let program = match gpu.create_program(VERTEX_SHADER, FRAGMENT_SHADER) {
            Ok(program) => program,
            Err(err) => {
                gpu.delete_buffer(buffer);
                gpu.delete_vertex_array(vertex_array);
                return Err(err);
            }
        };

        Ok(Self { vertex_array, buffer, program })
    }

    fn bind<'a>(&self, gpu: &'a G) -> ScopedBinding<'a, G> {
        ScopedBinding::new(gpu, self.vertex_array, self.buffer)
    }

    fn release(self, gpu: &G) {
        gpu.delete_program(self.program);
        gpu.delete_buffer(self.buffer);
        gpu.delete_vertex_array(self.vertex_array);
    }
}

enum RendererState<G: Gpu> {
    Uninitialized,
    Ready(GpuResources<G>),
    Disposed,
}

/// Raw contents of the vertex buffer as read back from the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferDump {
    pub bytes: usize,
    pub values: Vec<f32>,
}

impl BufferDump {
    pub fn float_count(&self) -> usize {
        self.values.len()
    }
}

type RepaintHook = Box<dyn Fn() + Send + Sync>;

/// Draws a [`WaveModel`] as a line strip.
///
/// Lifecycle is `Uninitialized -> Ready -> Disposed`. Every operation takes the
/// graphics context it should run against, which must be the one it was
/// initialized with.
pub struct Renderer<G: Gpu> {
    wave: WaveModel,
    frame: PlotFrame,
    viewport: Viewport,
    projection: Projection,
    vertex_count: usize,
    state: RendererState<G>,
    repaint: Option<RepaintHook>,
}

impl<G: Gpu> Default for Renderer<G> {
    fn default() -> Self {
        Self::new(WaveModel::default(), PlotFrame::default())
    }
}

impl<G: Gpu> Renderer<G> {
    pub fn new(wave: WaveModel, frame: PlotFrame) -> Self {
        Self {
            wave,
            frame,
            viewport: Viewport::default(),
            projection: frame.projection(),
            vertex_count: 0,
            state: RendererState::Uninitialized,
            repaint: None,
        }
    }

    /// Called after every buffer refresh so the host can schedule a redraw.
    pub fn set_repaint_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Box::new(hook));
    }

    pub fn state(&self) -> RendererStateKind {
        match self.state {
            RendererState::Uninitialized => RendererStateKind::Uninitialized,
            RendererState::Ready(_) => RendererStateKind::Ready,
            RendererState::Disposed => RendererStateKind::Disposed,
        }
    }

    pub fn wave(&self) -> &WaveModel {
        &self.wave
    }

    /// Mutating the model does not touch the GPU; follow up with [`Self::refresh_buffer`].
    pub fn wave_mut(&mut self) -> &mut WaveModel {
        &mut self.wave
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Number of vertices in the current buffer, updated with every upload.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn resources(&self, operation: &'static str) -> Result<&GpuResources<G>, RendererError> {
        match &self.state {
            RendererState::Ready(resources) => Ok(resources),
            _ => Err(RendererError::InvalidState {
                operation,
                detail: format!("renderer is {}, Ready required", self.state()),
            }),
        }
    }

    pub fn initialize(&mut self, gpu: &G) -> Result<(), RendererError> {
        if !matches!(self.state, RendererState::Uninitialized) {
            return Err(RendererError::InvalidState {
                operation: "initialize",
                detail: format!("renderer is {}, Uninitialized required", self.state()),
            });
        }

        let resources = GpuResources::acquire(gpu)?;
        {
            let _binding = resources.bind(gpu);
            gpu.vertex_attrib_f32(POSITION_ATTRIBUTE, FLOATS_PER_VERTEX as i32, VERTEX_STRIDE as i32);
        }
        self.state = RendererState::Ready(resources);
        log::info!("Renderer initialized");

        self.apply_pipeline(gpu)?;
        self.refresh_buffer(gpu)
    }

    /// Clear color, line width, and the program with its color and projection uniforms.
    fn apply_pipeline(&self, gpu: &G) -> Result<(), RendererError> {
        let program = self.resources("apply pipeline state")?.program;
        gpu.set_clear_color(CLEAR_COLOR);
        gpu.set_line_width(LINE_WIDTH);
        gpu.use_program(Some(program));
        gpu.set_uniform_vec4(program, "u_color", LINE_COLOR);
        gpu.set_uniform_mat4(program, "u_projection", self.projection.as_slice());
        Ok(())
    }

    /// Resamples with the default sample and period counts and uploads the result.
    pub fn refresh_buffer(&mut self, gpu: &G) -> Result<(), RendererError> {
        self.refresh_buffer_with(gpu, DEFAULT_SAMPLE_COUNT, DEFAULT_PERIOD_COUNT)
    }

    pub fn refresh_buffer_with(
        &mut self,
        gpu: &G,
        sample_count: usize,
        period_count: usize,
    ) -> Result<(), RendererError> {
        let resources = self.resources("refresh buffer")?;

        if self.wave.is_degenerate() {
            log::debug!("Period {} is not positive; drawing a flat line", self.wave.period);
        }

        let vertices = build_vertices(&self.wave, &self.frame, sample_count, period_count);
        let bytes: Vec<u8> = vertices.iter().flat_map(|value| value.to_ne_bytes()).collect();
        {
            let _binding = resources.bind(gpu);
            gpu.upload_dynamic(&bytes);
        }
        self.vertex_count = vertices.len() / FLOATS_PER_VERTEX;
        log::debug!("Uploaded {} vertices ({} bytes)", self.vertex_count, bytes.len());

        if let Some(repaint) = &self.repaint {
            repaint();
        }
        Ok(())
    }

    pub fn draw(&self, gpu: &G) -> Result<(), RendererError> {
        let resources = self.resources("draw")?;
        self.apply_pipeline(gpu)?;
        gpu.clear_color_buffer();
        {
            let _binding = resources.bind(gpu);
            gpu.draw_line_strip(0, self.vertex_count as i32);
        }
        gpu.use_program(None);
        Ok(())
    }

    /// Covers a `width` by `height` surface from the origin.
    pub fn resize(&mut self, gpu: &G, width: i32, height: i32) -> Result<(), RendererError> {
        self.set_viewport(gpu, Viewport::sized(width, height))
    }

    pub fn set_viewport(&mut self, gpu: &G, viewport: Viewport) -> Result<(), RendererError> {
        self.resources("resize")?;
        self.viewport = viewport;
        gpu.set_viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        self.projection = self.frame.projection();
        log::debug!("Viewport set to {viewport:?}");
        Ok(())
    }

    /// Sets one wave parameter and re-uploads the buffer.
    pub fn set_parameter(&mut self, gpu: &G, parameter: Parameter, radians: f32) -> Result<(), RendererError> {
        parameter.set(&mut self.wave, radians);
        self.refresh_buffer(gpu)
    }

    pub fn set_phase(&mut self, gpu: &G, phase: f32) -> Result<(), RendererError> {
        self.set_parameter(gpu, Parameter::Phase, phase)
    }

    pub fn set_amplitude(&mut self, gpu: &G, amplitude: f32) -> Result<(), RendererError> {
        self.set_parameter(gpu, Parameter::Amplitude, amplitude)
    }

    pub fn set_period(&mut self, gpu: &G, period: f32) -> Result<(), RendererError> {
        self.set_parameter(gpu, Parameter::Period, period)
    }

    /// Reads the vertex buffer back from the GPU and logs its size.
    pub fn dump_buffer_contents(&self, gpu: &G) -> Result<BufferDump, RendererError> {
        let resources = self.resources("dump buffer contents")?;
        let _binding = resources.bind(gpu);

        let size = gpu.array_buffer_size();
        if size == 0 {
            return Err(RendererError::InvalidState {
                operation: "dump buffer contents",
                detail: "the vertex buffer is empty".to_owned(),
            });
        }

        let mut raw = vec![0_u8; size];
        gpu.read_array_buffer(&mut raw);
        let values: Vec<f32> = raw
            .chunks_exact(std::mem::size_of::<f32>())
            .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        let dump = BufferDump { bytes: size, values };
        log::info!("{:?}", dump.values);
        log::info!("Data contains {} bytes, or {} floats", dump.bytes, dump.float_count());
        Ok(dump)
    }

    /// Releases GPU handles. Safe to call more than once.
    pub fn dispose(&mut self, gpu: &G) {
        match std::mem::replace(&mut self.state, RendererState::Disposed) {
            RendererState::Ready(resources) => {
                resources.release(gpu);
                self.vertex_count = 0;
                log::info!("Renderer disposed");
            }
            RendererState::Uninitialized | RendererState::Disposed => {}
        }
    }
}

impl<G: Gpu> Drop for Renderer<G> {
    fn drop(&mut self) {
        if let RendererState::Ready(resources) = &self.state {
            log::warn!("Renderer dropped without dispose; leaking {resources:?}");
        }
    }
}
