//! Introductory OpenGL exercises: a colored triangle, a stick figure built
//! from lines, and a tool that turns mouse clicks into triangles.

pub mod accumulator;
pub mod app;
pub mod args;
pub mod fps;
pub mod input;
pub mod logging;
pub mod math;
pub mod palette;
pub mod shaders;
pub mod stick_figure;
pub mod triangle;
