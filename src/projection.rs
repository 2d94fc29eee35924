use std::f32::consts::PI;

/// The region of wave space the viewer shows, together with the vertical
/// offset baked into every uploaded vertex. The offset only makes sense
/// relative to these bounds, so the two travel together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub vertical_offset: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self {
            vertical_offset: 10.0 * PI,
            left: 0.0,
            right: 12.0 * PI,
            bottom: 0.0,
            top: 12.0 * PI,
            near: -1.0,
            far: 1.0,
        }
    }
}

impl PlotFrame {
    pub fn projection(&self) -> Projection {
        Projection::orthographic(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }
}

/// Pixel rectangle of the drawing surface, origin at the bottom left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn sized(width: i32, height: i32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

/// Column-major 4x4 matrix mapping wave space into normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    matrix: [f32; 16],
}

impl Projection {
    /// Same matrix as `glOrtho`.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self {
            matrix: [
                2.0 / width, 0.0, 0.0, 0.0,
                0.0, 2.0 / height, 0.0, 0.0,
                0.0, 0.0, -2.0 / depth, 0.0,
                -(right + left) / width, -(top + bottom) / height, -(far + near) / depth, 1.0,
            ],
        }
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.matrix
    }

    pub fn transform(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.matrix;
        (m[0] * x + m[4] * y + m[12], m[1] * x + m[5] * y + m[13])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-5 && (actual.1 - expected.1).abs() < 1e-5,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn default_frame_corners_map_to_ndc_corners() {
        let projection = PlotFrame::default().projection();
        assert_close(projection.transform(0.0, 0.0), (-1.0, -1.0));
        assert_close(projection.transform(12.0 * PI, 12.0 * PI), (1.0, 1.0));
        assert_close(projection.transform(6.0 * PI, 6.0 * PI), (0.0, 0.0));
    }

    #[test]
    fn offset_line_sits_inside_the_frame() {
        let frame = PlotFrame::default();
        let (_, y) = frame.projection().transform(0.0, frame.vertical_offset);
        assert!(y > -1.0 && y < 1.0);
    }

    #[test]
    fn depth_range_matches_gl_ortho() {
        let matrix = Projection::orthographic(0.0, 1.0, 0.0, 1.0, -1.0, 1.0);
        assert_eq!(matrix.as_slice()[10], -1.0);
        assert_eq!(matrix.as_slice()[14], 0.0);
    }

    #[test]
    fn viewport_sized_starts_at_origin() {
        assert_eq!(Viewport::sized(640, 480), Viewport { x: 0, y: 0, width: 640, height: 480 });
    }
}
