//! Fixed paths that can be committed without drawing by hand.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::Point;

/// Built-in path presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Square,
    Circle,
    Star,
}

impl Shape {
    /// Sample the outline as a closed loop of `samples` points
    ///
    /// `size` is the half-extent of the shape around `center` (pixels).
    pub fn points(self, center: Point, size: f64, samples: usize) -> Vec<Point> {
        match self {
            Shape::Circle => (0..samples)
                .map(|i| {
                    let theta = TAU * i as f64 / samples as f64;
                    center + Point::new(theta.cos(), theta.sin()) * size
                })
                .collect(),
            Shape::Square => {
                let corners = [
                    Point::new(-size, -size),
                    Point::new(size, -size),
                    Point::new(size, size),
                    Point::new(-size, size),
                ]
                .map(|corner| center + corner);
                resample_polygon(&corners, samples)
            }
            Shape::Star => {
                let corners: Vec<Point> = (0..10)
                    .map(|i| {
                        let radius = if i % 2 == 0 { size } else { size * 0.4 };
                        let theta = TAU * i as f64 / 10.0 - FRAC_PI_2;
                        center + Point::new(theta.cos(), theta.sin()) * radius
                    })
                    .collect();
                resample_polygon(&corners, samples)
            }
        }
    }
}

/// Evenly spaced points along the perimeter of a closed polygon
fn resample_polygon(corners: &[Point], samples: usize) -> Vec<Point> {
    if corners.is_empty() || samples == 0 {
        return Vec::new();
    }

    let edges: Vec<(Point, Point)> = corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
        .collect();
    let perimeter: f64 = edges.iter().map(|(a, b)| a.distance(*b)).sum();
    if perimeter == 0.0 {
        return vec![corners[0]; samples];
    }

    let step = perimeter / samples as f64;
    let mut points = Vec::with_capacity(samples);
    let mut edge = 0;
    let mut edge_start = 0.0;
    for i in 0..samples {
        let target = i as f64 * step;
        while edge + 1 < edges.len() && target > edge_start + edges[edge].0.distance(edges[edge].1)
        {
            edge_start += edges[edge].0.distance(edges[edge].1);
            edge += 1;
        }
        let (a, b) = edges[edge];
        let length = a.distance(b);
        let along = if length > 0.0 {
            ((target - edge_start) / length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        points.push(a.lerp(b, along));
    }
    points
}
