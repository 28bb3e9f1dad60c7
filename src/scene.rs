//! Conversion of a session frame into colored line segments.
//!
//! The window is split into two panes: the captured path on the left, the
//! epicycles and their trail on the right. Everything is emitted as a flat
//! line list in window pixels (origin top-left).

use std::f64::consts::TAU;

use bytemuck::{Pod, Zeroable};

use crate::chain::Circle;
use crate::params::{Color, RenderConfig};
use crate::session::Frame;
use crate::Point;

/// One end of a line segment
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    fn new(point: Point, color: Color) -> Self {
        Self {
            position: [point.x as f32, point.y as f32],
            color,
        }
    }
}

/// Line-list geometry for one frame
pub fn build_scene(frame: &Frame<'_>, config: &RenderConfig) -> Vec<LineVertex> {
    let mut vertices = Vec::new();
    let pane_width = config.pane_width();
    let right_pane = Point::new(pane_width, 0.0);

    // Pane divider
    push_segment(
        &mut vertices,
        Point::new(pane_width, 0.0),
        Point::new(pane_width, config.window_height as f64),
        config.divider_color,
    );

    push_polyline(&mut vertices, frame.path, Point::ZERO, config.path_color);

    for circle in frame.circles(config.min_circle_radius) {
        push_circle(
            &mut vertices,
            circle,
            right_pane,
            config.circle_segments,
            config.circle_color,
        );
    }
    push_polyline(&mut vertices, &frame.trail, right_pane, config.path_color);
    push_polyline(&mut vertices, &frame.arms, right_pane, config.arm_color);

    vertices
}

fn push_segment(vertices: &mut Vec<LineVertex>, a: Point, b: Point, color: Color) {
    vertices.push(LineVertex::new(a, color));
    vertices.push(LineVertex::new(b, color));
}

/// Open polyline; fewer than two points draws nothing
fn push_polyline(vertices: &mut Vec<LineVertex>, points: &[Point], offset: Point, color: Color) {
    for pair in points.windows(2) {
        push_segment(vertices, pair[0] + offset, pair[1] + offset, color);
    }
}

fn push_circle(
    vertices: &mut Vec<LineVertex>,
    circle: Circle,
    offset: Point,
    segments: u32,
    color: Color,
) {
    let center = circle.center + offset;
    let rim = |i: u32| {
        let theta = TAU * i as f64 / segments as f64;
        center + Point::new(theta.cos(), theta.sin()) * circle.radius
    };
    for i in 0..segments {
        push_segment(vertices, rim(i), rim(i + 1), color);
    }
}
