pub mod app;

pub mod constants;

pub mod controls;

pub mod gpu;

pub mod projection;

pub mod renderer;

pub mod wave;
