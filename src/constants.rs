use std::f32::consts::PI;

pub const WINDOW_TITLE: &str = "Wave Viewer";

pub const WINDOW_WIDTH: f32 = 1000.0;

pub const WINDOW_HEIGHT: f32 = 800.0;

pub const DEFAULT_SAMPLE_COUNT: usize = 40;

pub const DEFAULT_PERIOD_COUNT: usize = 6;

pub const DEFAULT_PHASE: f32 = 0.0;

pub const DEFAULT_AMPLITUDE: f32 = PI;

pub const DEFAULT_PERIOD: f32 = PI;

/// Opaque white, RGBA
pub const CLEAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Opaque black, RGBA
pub const LINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Forward-compatible core contexts (macOS) only accept 1.0 and draw hairlines instead.
pub const LINE_WIDTH: f32 = 3.0;

pub const FLOATS_PER_VERTEX: usize = 2;

pub const VERTEX_STRIDE: usize = FLOATS_PER_VERTEX * std::mem::size_of::<f32>();

