use eframe::glow::{self, HasContext};

use super::{Gpu, GpuError};

impl Gpu for glow::Context {
    type VertexArray = <glow::Context as HasContext>::VertexArray;
    type Buffer = <glow::Context as HasContext>::Buffer;
    type Program = <glow::Context as HasContext>::Program;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, GpuError> {
        unsafe { HasContext::create_vertex_array(self) }.map_err(GpuError::CreateVertexArray)
    }

    fn create_buffer(&self) -> Result<Self::Buffer, GpuError> {
        unsafe { HasContext::create_buffer(self) }.map_err(GpuError::CreateBuffer)
    }

    fn create_program(&self, vertex_source: &str, fragment_source: &str) -> Result<Self::Program, GpuError> {
        unsafe {
            let program = HasContext::create_program(self).map_err(GpuError::LinkProgram)?;

            let sources = [
                (glow::VERTEX_SHADER, vertex_source),
                (glow::FRAGMENT_SHADER, fragment_source),
            ];

            let mut shaders = Vec::with_capacity(sources.len());
            for (kind, source) in sources {
                let shader = match self.create_shader(kind) {
                    Ok(shader) => shader,
                    Err(message) => {
                        shaders.into_iter().for_each(|shader| self.delete_shader(shader));
                        HasContext::delete_program(self, program);
                        return Err(GpuError::CreateShader(message));
                    }
                };
                self.shader_source(shader, source);
                self.compile_shader(shader);
                if !self.get_shader_compile_status(shader) {
                    let log = self.get_shader_info_log(shader);
                    self.delete_shader(shader);
                    shaders.into_iter().for_each(|shader| self.delete_shader(shader));
                    HasContext::delete_program(self, program);
                    return Err(GpuError::CompileShader(log));
                }
                self.attach_shader(program, shader);
                shaders.push(shader);
            }

            self.link_program(program);
            let linked = self.get_program_link_status(program);
            let log = self.get_program_info_log(program);

            for shader in shaders {
                self.detach_shader(program, shader);
                self.delete_shader(shader);
            }

            if linked {
                Ok(program)
            } else {
                HasContext::delete_program(self, program);
                Err(GpuError::LinkProgram(log))
            }
        }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn bound_vertex_array(&self) -> Option<Self::VertexArray> {
        unsafe { self.get_parameter_vertex_array(glow::VERTEX_ARRAY_BINDING) }
    }

    fn bound_array_buffer(&self) -> Option<Self::Buffer> {
        unsafe { self.get_parameter_buffer(glow::ARRAY_BUFFER_BINDING) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { self.bind_buffer(glow::ARRAY_BUFFER, buffer) }
    }

    fn vertex_attrib_f32(&self, index: u32, components: i32, stride: i32) {
        unsafe {
            self.enable_vertex_attrib_array(index);
            self.vertex_attrib_pointer_f32(index, components, glow::FLOAT, false, stride, 0);
        }
    }

    fn upload_dynamic(&self, data: &[u8]) {
        unsafe { self.buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::DYNAMIC_DRAW) }
    }

    fn array_buffer_size(&self) -> usize {
        let size = unsafe { self.get_buffer_parameter_i32(glow::ARRAY_BUFFER, glow::BUFFER_SIZE) };
        usize::try_from(size).unwrap_or(0)
    }

    fn read_array_buffer(&self, out: &mut [u8]) {
        unsafe { self.get_buffer_sub_data(glow::ARRAY_BUFFER, 0, out) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn set_uniform_mat4(&self, program: Self::Program, name: &str, matrix: &[f32; 16]) {
        unsafe {
            let location = self.get_uniform_location(program, name);
            self.uniform_matrix_4_f32_slice(location.as_ref(), false, matrix);
        }
    }

    fn set_uniform_vec4(&self, program: Self::Program, name: &str, value: [f32; 4]) {
        let [x, y, z, w] = value;
        unsafe {
            let location = self.get_uniform_location(program, name);
            self.uniform_4_f32(location.as_ref(), x, y, z, w);
        }
    }

    fn set_clear_color(&self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe { self.clear_color(r, g, b, a) }
    }

    fn set_line_width(&self, width: f32) {
        unsafe { self.line_width(width) }
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.viewport(x, y, width, height) }
    }

    fn clear_color_buffer(&self) {
        unsafe { self.clear(glow::COLOR_BUFFER_BIT) }
    }

    fn draw_line_strip(&self, first: i32, count: i32) {
        unsafe { self.draw_arrays(glow::LINE_STRIP, first, count) }
    }
}
