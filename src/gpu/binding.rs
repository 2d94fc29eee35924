use super::Gpu;

/// Binds a vertex array and array buffer for the lifetime of the guard,
/// restoring whatever was bound before when dropped.
pub struct ScopedBinding<'a, G: Gpu> {
    gpu: &'a G,
    previous_vertex_array: Option<G::VertexArray>,
    previous_buffer: Option<G::Buffer>,
}

impl<'a, G: Gpu> ScopedBinding<'a, G> {
    pub fn new(gpu: &'a G, vertex_array: G::VertexArray, buffer: G::Buffer) -> Self {
        let previous_vertex_array = gpu.bound_vertex_array();
        let previous_buffer = gpu.bound_array_buffer();

        gpu.bind_vertex_array(Some(vertex_array));
        gpu.bind_array_buffer(Some(buffer));

        Self { gpu, previous_vertex_array, previous_buffer }
    }
}

impl<G: Gpu> Drop for ScopedBinding<'_, G> {
    fn drop(&mut self) {
        self.gpu.bind_array_buffer(self.previous_buffer);
        self.gpu.bind_vertex_array(self.previous_vertex_array);
    }
}
