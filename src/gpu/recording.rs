use std::{cell::RefCell, collections::HashMap};

use super::{Gpu, GpuError};

/// Every call made against a [`RecordingGpu`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateVertexArray(u32),
    CreateBuffer(u32),
    CreateProgram(u32),
    DeleteVertexArray(u32),
    DeleteBuffer(u32),
    DeleteProgram(u32),
    BindVertexArray(Option<u32>),
    BindArrayBuffer(Option<u32>),
    VertexAttrib { index: u32, components: i32, stride: i32 },
    Upload { buffer: Option<u32>, bytes: usize },
    UseProgram(Option<u32>),
    UniformMat4(String, [f32; 16]),
    UniformVec4(String, [f32; 4]),
    ClearColor([f32; 4]),
    LineWidth(f32),
    Viewport(i32, i32, i32, i32),
    Clear,
    DrawLineStrip { vertex_array: Option<u32>, first: i32, count: i32 },
}

#[derive(Debug, Default)]
struct State {
    next_handle: u32,
    vertex_array: Option<u32>,
    array_buffer: Option<u32>,
    buffers: HashMap<u32, Vec<u8>>,
    calls: Vec<Call>,
    fail_program: bool,
}

/// Software stand-in for a GL context: hands out handles, tracks bindings
/// and buffer storage, and records the calls it receives.
#[derive(Debug, Default)]
pub struct RecordingGpu {
    state: RefCell<State>,
}

impl RecordingGpu {
    pub fn failing_program() -> Self {
        let gpu = Self::default();
        gpu.state.borrow_mut().fail_program = true;
        gpu
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn buffer_contents(&self, buffer: u32) -> Option<Vec<u8>> {
        self.state.borrow().buffers.get(&buffer).cloned()
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().buffers.len()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_handle(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        state.next_handle += 1;
        state.next_handle
    }
}

impl Gpu for RecordingGpu {
    type VertexArray = u32;
    type Buffer = u32;
    type Program = u32;

    fn create_vertex_array(&self) -> Result<u32, GpuError> {
        let handle = self.next_handle();
        self.record(Call::CreateVertexArray(handle));
        Ok(handle)
    }

    fn create_buffer(&self) -> Result<u32, GpuError> {
        let handle = self.next_handle();
        self.state.borrow_mut().buffers.insert(handle, Vec::new());
        self.record(Call::CreateBuffer(handle));
        Ok(handle)
    }

    fn create_program(&self, _vertex_source: &str, _fragment_source: &str) -> Result<u32, GpuError> {
        if self.state.borrow().fail_program {
            return Err(GpuError::LinkProgram("link refused".to_owned()));
        }
        let handle = self.next_handle();
        self.record(Call::CreateProgram(handle));
        Ok(handle)
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.state.borrow_mut().buffers.remove(&buffer);
        self.record(Call::DeleteBuffer(buffer));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn bound_vertex_array(&self) -> Option<u32> {
        self.state.borrow().vertex_array
    }

    fn bound_array_buffer(&self) -> Option<u32> {
        self.state.borrow().array_buffer
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.state.borrow_mut().vertex_array = vertex_array;
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.state.borrow_mut().array_buffer = buffer;
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn vertex_attrib_f32(&self, index: u32, components: i32, stride: i32) {
        self.record(Call::VertexAttrib { index, components, stride });
    }

    fn upload_dynamic(&self, data: &[u8]) {
        let buffer = {
            let mut state = self.state.borrow_mut();
            let buffer = state.array_buffer;
            if let Some(storage) = buffer.and_then(|handle| state.buffers.get_mut(&handle)) {
                *storage = data.to_vec();
            }
            buffer
        };
        self.record(Call::Upload { buffer, bytes: data.len() });
    }

    fn array_buffer_size(&self) -> usize {
        let state = self.state.borrow();
        state
            .array_buffer
            .and_then(|handle| state.buffers.get(&handle))
            .map_or(0, Vec::len)
    }

    fn read_array_buffer(&self, out: &mut [u8]) {
        let state = self.state.borrow();
        let storage = state
            .array_buffer
            .and_then(|handle| state.buffers.get(&handle))
            .expect("read from an unbound array buffer");
        out.copy_from_slice(&storage[..out.len()]);
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn set_uniform_mat4(&self, _program: u32, name: &str, matrix: &[f32; 16]) {
        self.record(Call::UniformMat4(name.to_owned(), *matrix));
    }

    fn set_uniform_vec4(&self, _program: u32, name: &str, value: [f32; 4]) {
        self.record(Call::UniformVec4(name.to_owned(), value));
    }

    fn set_clear_color(&self, color: [f32; 4]) {
        self.record(Call::ClearColor(color));
    }

    fn set_line_width(&self, width: f32) {
        self.record(Call::LineWidth(width));
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear_color_buffer(&self) {
        self.record(Call::Clear);
    }

    fn draw_line_strip(&self, first: i32, count: i32) {
        let vertex_array = self.state.borrow().vertex_array;
        self.record(Call::DrawLineStrip { vertex_array, first, count });
    }
}
