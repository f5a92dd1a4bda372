//! A Whitted-style ray tracer core.
//!
//! Objects are canonical shapes placed in the world by 4x4 transforms and shaded with
//! the Phong model under a single point light, with hard shadows and recursive mirror
//! reflection. A [`Camera`](camera::Camera) renders a [`World`](world::World) into a
//! [`Canvas`](canvas::Canvas), tracing pixels in parallel.

#![allow(clippy::many_single_char_names)]

pub mod camera;
pub mod canvas;
pub mod error;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod pattern;
pub mod world;

pub use error::Error;
