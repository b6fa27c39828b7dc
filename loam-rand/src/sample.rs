//! Point, walk, and dice sampling helpers.
//!
//! Thin consumers of the public generator surface: simple loops over
//! [`SeededRandom::next_f64`] and friends, with no generator internals
//! and no numeric algorithm of their own.

use std::f64::consts::PI;

use rustc_hash::FxHashSet;

use crate::SeededRandom;

/// 2D integer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point2 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

/// 3D integer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point3 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
    /// Depth component.
    pub z: i32,
}

/// A rounded draw scaled to `[0, max]`.
pub fn random_index(rand: &mut SeededRandom, max: u32) -> i32 {
    (rand.next_f64() * f64::from(max)).round() as i32
}

/// Axis-aligned random walk over the plane, starting at the origin.
///
/// Cubic walks move a fixed `amplitude` per step (one draw); otherwise
/// the magnitude is drawn too (two draws per step). A direction draw
/// outside the four axes leaves the position in place for that step.
pub fn walk(rand: &mut SeededRandom, steps: usize, amplitude: i32, cubic: bool) -> Vec<Point2> {
    let mut x = 0;
    let mut y = 0;
    let mut path = Vec::with_capacity(steps + 1);
    path.push(Point2 { x, y });

    for _ in 0..steps {
        let direction = (rand.next_f64() * 4.0).floor() as i32;
        let magnitude = step_magnitude(rand, amplitude, cubic);
        match direction {
            0 => x += magnitude,
            1 => y += magnitude,
            2 => x -= magnitude,
            3 => y -= magnitude,
            _ => {}
        }
        path.push(Point2 { x, y });
    }
    path
}

/// Axis-aligned random walk through space, starting at the origin.
pub fn walk3(rand: &mut SeededRandom, steps: usize, amplitude: i32, cubic: bool) -> Vec<Point3> {
    let mut x = 0;
    let mut y = 0;
    let mut z = 0;
    let mut path = Vec::with_capacity(steps + 1);
    path.push(Point3 { x, y, z });

    for _ in 0..steps {
        let direction = (rand.next_f64() * 6.0).floor() as i32;
        let magnitude = step_magnitude(rand, amplitude, cubic);
        match direction {
            0 => x += magnitude,
            1 => y += magnitude,
            2 => z += magnitude,
            3 => x -= magnitude,
            4 => y -= magnitude,
            5 => z -= magnitude,
            _ => {}
        }
        path.push(Point3 { x, y, z });
    }
    path
}

fn step_magnitude(rand: &mut SeededRandom, amplitude: i32, cubic: bool) -> i32 {
    if cubic {
        amplitude
    } else {
        (rand.next_f64() * f64::from(amplitude)).floor() as i32 + 1
    }
}

/// A point jittered around `center` in polar coordinates, rounded to
/// the integer lattice. The radius draw biases results toward the
/// center, which leads to denser packings when used for sampling.
pub fn point_around(rand: &mut SeededRandom, center: Point2, radius: f64) -> Point2 {
    let angle = 2.0 * PI * rand.next_f64();
    let radius = radius * rand.next_f64();
    Point2 {
        x: (f64::from(center.x) + radius * angle.cos()).round() as i32,
        y: (f64::from(center.y) + radius * angle.sin()).round() as i32,
    }
}

/// Grid-stratified point sampling with a minimum-spacing rejection.
///
/// One candidate is jittered per grid cell of side `radius`; a
/// candidate is rejected when it falls outside the bounds or within
/// half the spacing radius of an already accepted point.
pub fn spaced_points(
    rand: &mut SeededRandom,
    width: i32,
    height: i32,
    radius: f64,
) -> Vec<Point2> {
    let cell = (radius.floor() as i32).max(1);
    let start = (cell + 1) / 2;
    let spacing = radius / 2.0;

    let mut accepted = Vec::new();
    let mut occupied: FxHashSet<(i32, i32)> = FxHashSet::default();

    let mut row = 0;
    let mut y = start;
    while y <= height {
        let mut x = if row == 0 { 0 } else { start };
        while x <= width {
            let candidate = point_around(rand, Point2 { x, y }, radius);
            if candidate.x >= 0
                && candidate.x <= width
                && candidate.y >= 0
                && candidate.y <= height
                && !in_neighborhood(&occupied, candidate, spacing)
            {
                occupied.insert((candidate.x, candidate.y));
                accepted.push(candidate);
            }
            x += cell;
        }
        row += 1;
        y += cell;
    }
    accepted
}

fn in_neighborhood(occupied: &FxHashSet<(i32, i32)>, point: Point2, radius: f64) -> bool {
    let reach = radius.ceil() as i32;
    let r2 = radius * radius;
    for dx in -reach..=reach {
        for dy in -reach..=reach {
            let d2 = f64::from(dx * dx + dy * dy);
            if d2 < r2 && occupied.contains(&(point.x + dx, point.y + dy)) {
                return true;
            }
        }
    }
    false
}

/// `count` points rounded onto a `width`×`height` box.
pub fn scatter(rand: &mut SeededRandom, width: f64, height: f64, count: usize) -> Vec<Point2> {
    (0..count)
        .map(|_| Point2 {
            x: (rand.next_f64() * width).round() as i32,
            y: (rand.next_f64() * height).round() as i32,
        })
        .collect()
}

/// `count` points rounded into a `width`×`height`×`depth` box.
pub fn scatter3(
    rand: &mut SeededRandom,
    width: f64,
    height: f64,
    depth: f64,
    count: usize,
) -> Vec<Point3> {
    (0..count)
        .map(|_| Point3 {
            x: (rand.next_f64() * width).round() as i32,
            y: (rand.next_f64() * height).round() as i32,
            z: (rand.next_f64() * depth).round() as i32,
        })
        .collect()
}

/// Rolls a die of `sides` faces, rerolling while the last roll is at or
/// above a positive `reroll` threshold (or at or below the negated
/// negative threshold). Returns every roll, the terminating one last.
pub fn dice(rand: &mut SeededRandom, sides: i32, reroll: Option<i32>) -> Vec<i32> {
    let mut rolls = vec![roll(rand, sides)];
    if let Some(threshold) = reroll {
        while explodes(rolls[rolls.len() - 1], threshold) {
            rolls.push(roll(rand, sides));
        }
    }
    rolls
}

fn roll(rand: &mut SeededRandom, sides: i32) -> i32 {
    rand.next_between(1.0, f64::from(sides)).round() as i32
}

fn explodes(value: i32, threshold: i32) -> bool {
    (threshold > 0 && value >= threshold) || (threshold < 0 && value <= -threshold)
}

/// In-place Fisher–Yates shuffle driven by the seeded generator.
pub fn shuffle<T>(rand: &mut SeededRandom, values: &mut [T]) {
    let len = values.len();
    for i in 0..len {
        let remaining = len - i;
        let j = (rand.next_f64() * remaining as f64).floor() as usize;
        values.swap(i, i + j.min(remaining - 1));
    }
}
