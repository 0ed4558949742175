//! Shape generation for 3D primitives

use glam::Vec3;

use super::vertex::{Vertex, colors};

/// Width of a ground-grid line in world units
const GRID_LINE_WIDTH: f32 = 0.02;
/// Lift grid lines off y = 0 so they don't z-fight with pillar bases
const GRID_LIFT: f32 = 0.001;

/// Per-face brightness, stands in for lighting
const SHADE_TOP: f32 = 1.0;
const SHADE_SIDE_X: f32 = 0.8;
const SHADE_SIDE_Z: f32 = 0.65;
const SHADE_BOTTOM: f32 = 0.5;

fn shade(color: [f32; 4], factor: f32) -> [f32; 4] {
    [color[0] * factor, color[1] * factor, color[2] * factor, color[3]]
}

/// Two triangles for the quad `a b c d` (counter-clockwise)
fn quad(vertices: &mut Vec<Vertex>, [a, b, c, d]: [Vec3; 4], color: [f32; 4]) {
    vertices.push(Vertex::new(a, color));
    vertices.push(Vertex::new(b, color));
    vertices.push(Vertex::new(c, color));

    vertices.push(Vertex::new(c, color));
    vertices.push(Vertex::new(d, color));
    vertices.push(Vertex::new(a, color));
}

/// Axis-aligned box centered at `center` (36 vertices)
pub fn cube(center: Vec3, size: Vec3, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(36);
    let h = size / 2.0;
    let corner = |x: f32, y: f32, z: f32| center + Vec3::new(x * h.x, y * h.y, z * h.z);

    // +Y / -Y
    quad(
        &mut vertices,
        [
            corner(-1.0, 1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(1.0, 1.0, -1.0),
            corner(-1.0, 1.0, -1.0),
        ],
        shade(color, SHADE_TOP),
    );
    quad(
        &mut vertices,
        [
            corner(-1.0, -1.0, -1.0),
            corner(1.0, -1.0, -1.0),
            corner(1.0, -1.0, 1.0),
            corner(-1.0, -1.0, 1.0),
        ],
        shade(color, SHADE_BOTTOM),
    );
    // +X / -X
    quad(
        &mut vertices,
        [
            corner(1.0, -1.0, 1.0),
            corner(1.0, -1.0, -1.0),
            corner(1.0, 1.0, -1.0),
            corner(1.0, 1.0, 1.0),
        ],
        shade(color, SHADE_SIDE_X),
    );
    quad(
        &mut vertices,
        [
            corner(-1.0, -1.0, -1.0),
            corner(-1.0, -1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
            corner(-1.0, 1.0, -1.0),
        ],
        shade(color, SHADE_SIDE_X),
    );
    // +Z / -Z
    quad(
        &mut vertices,
        [
            corner(-1.0, -1.0, 1.0),
            corner(1.0, -1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
        ],
        shade(color, SHADE_SIDE_Z),
    );
    quad(
        &mut vertices,
        [
            corner(1.0, -1.0, -1.0),
            corner(-1.0, -1.0, -1.0),
            corner(-1.0, 1.0, -1.0),
            corner(1.0, 1.0, -1.0),
        ],
        shade(color, SHADE_SIDE_Z),
    );

    vertices
}

/// Ground grid of `slices` cells per side centered on the origin.
///
/// Each line is a thin quad on the ground plane; the two center lines use
/// the axis color.
pub fn grid(slices: u32, spacing: f32) -> Vec<Vertex> {
    let half_slices = (slices / 2) as i32;
    let extent = half_slices as f32 * spacing;
    let w = GRID_LINE_WIDTH / 2.0;
    let y = GRID_LIFT;

    let mut vertices = Vec::with_capacity(((half_slices * 2 + 1) * 12) as usize);
    for i in -half_slices..=half_slices {
        let color = if i == 0 { colors::GRID_AXIS } else { colors::GRID };
        let offset = i as f32 * spacing;

        // Line parallel to Z
        quad(
            &mut vertices,
            [
                Vec3::new(offset - w, y, extent),
                Vec3::new(offset + w, y, extent),
                Vec3::new(offset + w, y, -extent),
                Vec3::new(offset - w, y, -extent),
            ],
            color,
        );
        // Line parallel to X
        quad(
            &mut vertices,
            [
                Vec3::new(-extent, y, offset + w),
                Vec3::new(extent, y, offset + w),
                Vec3::new(extent, y, offset - w),
                Vec3::new(-extent, y, offset - w),
            ],
            color,
        );
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_bounds() {
        let vertices = cube(Vec3::new(2.0, 2.5, 0.0), Vec3::new(1.0, 5.0, 1.0), [1.0; 4]);
        assert_eq!(vertices.len(), 36);

        for v in &vertices {
            let [x, y, z, w] = v.position;
            assert_eq!(w, 1.0);
            assert!((1.5..=2.5).contains(&x));
            assert!((0.0..=5.0).contains(&y));
            assert!((-0.5..=0.5).contains(&z));
        }
    }

    #[test]
    fn test_cube_top_is_brightest() {
        let vertices = cube(Vec3::ZERO, Vec3::ONE, [1.0, 1.0, 1.0, 1.0]);
        let faces: Vec<_> = vertices.chunks(6).collect();
        assert_eq!(faces.len(), 6);

        // Every face is a single flat shade
        for face in &faces {
            assert!(face.iter().all(|v| v.color == face[0].color));
        }

        let top = &faces[0];
        assert_eq!(top[0].color, [1.0, 1.0, 1.0, 1.0]);
        assert!(top.iter().all(|v| v.position[1] == 0.5));
        for face in &faces[1..] {
            assert!(face[0].color[0] < top[0].color[0]);
            assert_eq!(face[0].color[3], 1.0);
        }
        assert_eq!(faces[1][0].color, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_grid_line_count() {
        // 10 slices → 11 lines per direction, two quads per step
        let vertices = grid(10, 1.0);
        assert_eq!(vertices.len(), 11 * 2 * 6);

        let max_x = vertices.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!((5.0..=5.0 + GRID_LINE_WIDTH).contains(&max_x));
    }
}
