use std::fmt::Debug;

use thiserror::Error;

mod binding;
pub use binding::*;

mod glow_backend;

#[cfg(test)]
pub(crate) mod recording;

/// The graphics calls the renderer depends on.
///
/// Handles are plain copyable identifiers here; ownership of them is tracked
/// by the renderer, not by the backend.
pub trait Gpu {
    type VertexArray: Copy + PartialEq + Debug;
    type Buffer: Copy + PartialEq + Debug;
    type Program: Copy + PartialEq + Debug;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, GpuError>;
    fn create_buffer(&self) -> Result<Self::Buffer, GpuError>;
    fn create_program(&self, vertex_source: &str, fragment_source: &str) -> Result<Self::Program, GpuError>;

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn delete_program(&self, program: Self::Program);

    fn bound_vertex_array(&self) -> Option<Self::VertexArray>;
    fn bound_array_buffer(&self) -> Option<Self::Buffer>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);

    /// Enables attribute `index` as `components` non-normalized floats every `stride` bytes.
    fn vertex_attrib_f32(&self, index: u32, components: i32, stride: i32);

    /// Replaces the bound array buffer's contents, hinting frequent rewrites.
    fn upload_dynamic(&self, data: &[u8]);
    fn array_buffer_size(&self) -> usize;
    fn read_array_buffer(&self, out: &mut [u8]);

    fn use_program(&self, program: Option<Self::Program>);
    fn set_uniform_mat4(&self, program: Self::Program, name: &str, matrix: &[f32; 16]);
    fn set_uniform_vec4(&self, program: Self::Program, name: &str, value: [f32; 4]);

    fn set_clear_color(&self, color: [f32; 4]);
    fn set_line_width(&self, width: f32);
    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color_buffer(&self);
    fn draw_line_strip(&self, first: i32, count: i32);
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GpuError {
    #[error("Failed to create vertex array: {0}")]
    CreateVertexArray(String),

    #[error("Failed to create buffer: {0}")]
    CreateBuffer(String),

    #[error("Failed to create shader: {0}")]
    CreateShader(String),

    #[error("Failed to compile shader: {0}")]
    CompileShader(String),

    #[error("Failed to link program: {0}")]
    LinkProgram(String),
}
