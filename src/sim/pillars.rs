//! Static pillar lattice
//!
//! Generated once before the first frame and read-only afterwards.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named colors a pillar can be painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Yellow,
    Gold,
    Orange,
    Pink,
    Red,
    Maroon,
    Green,
    Lime,
    DarkGreen,
    SkyBlue,
    Blue,
    DarkBlue,
    Purple,
    Violet,
    DarkPurple,
    Beige,
    Brown,
    DarkBrown,
}

impl NamedColor {
    /// The pillar palette, in pick order
    pub const PALETTE: [NamedColor; 18] = [
        NamedColor::Yellow,
        NamedColor::Gold,
        NamedColor::Orange,
        NamedColor::Pink,
        NamedColor::Red,
        NamedColor::Maroon,
        NamedColor::Green,
        NamedColor::Lime,
        NamedColor::DarkGreen,
        NamedColor::SkyBlue,
        NamedColor::Blue,
        NamedColor::DarkBlue,
        NamedColor::Purple,
        NamedColor::Violet,
        NamedColor::DarkPurple,
        NamedColor::Beige,
        NamedColor::Brown,
        NamedColor::DarkBrown,
    ];

    /// 8-bit RGB triple
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            NamedColor::Yellow => [253, 249, 0],
            NamedColor::Gold => [255, 203, 0],
            NamedColor::Orange => [255, 161, 0],
            NamedColor::Pink => [255, 109, 194],
            NamedColor::Red => [230, 41, 55],
            NamedColor::Maroon => [190, 33, 55],
            NamedColor::Green => [0, 228, 48],
            NamedColor::Lime => [0, 158, 47],
            NamedColor::DarkGreen => [0, 117, 44],
            NamedColor::SkyBlue => [102, 191, 255],
            NamedColor::Blue => [0, 121, 241],
            NamedColor::DarkBlue => [0, 82, 172],
            NamedColor::Purple => [200, 122, 255],
            NamedColor::Violet => [135, 60, 190],
            NamedColor::DarkPurple => [112, 31, 126],
            NamedColor::Beige => [211, 176, 131],
            NamedColor::Brown => [127, 106, 79],
            NamedColor::DarkBrown => [76, 63, 47],
        }
    }

    /// Linear 0-1 RGBA for the renderer
    pub fn rgba(self) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    /// Uniform pick from [`NamedColor::PALETTE`]
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }
}

/// A static obstacle standing on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    /// Ground-plane position (x, z)
    pub grid_position: Vec2,
    pub height: f32,
    pub color: NamedColor,
}

impl Pillar {
    /// Box center: base rests on y = 0
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.grid_position.x, self.height / 2.0, self.grid_position.y)
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(PILLAR_SIZE_X, self.height, PILLAR_SIZE_Z)
    }
}

/// Lattice dimensions and spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub spacing: Vec2,
    pub height: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: PILLARS_GRID_WIDTH,
            rows: PILLARS_GRID_HEIGHT,
            spacing: Vec2::new(PILLARS_GRID_SPACING_X, PILLARS_GRID_SPACING_Y),
            height: PILLAR_HEIGHT,
        }
    }
}

impl GridLayout {
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major linear index of a lattice cell
    #[inline]
    pub fn index(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }
}

/// All pillars, stored by linear lattice index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarGrid {
    pub layout: GridLayout,
    pillars: Vec<Pillar>,
}

impl PillarGrid {
    /// Lay out every lattice cell and paint it a random palette color
    pub fn generate(layout: GridLayout, rng: &mut impl Rng) -> Self {
        let placeholder = Pillar {
            grid_position: Vec2::ZERO,
            height: layout.height,
            color: NamedColor::Lime,
        };
        let mut pillars = vec![placeholder; layout.len()];

        for column in 0..layout.columns {
            for row in 0..layout.rows {
                let pillar = &mut pillars[layout.index(column, row)];
                pillar.height = layout.height;
                pillar.color = NamedColor::random(rng);
                pillar.grid_position = Vec2::new(
                    column as f32 * layout.spacing.x,
                    row as f32 * layout.spacing.y,
                );
            }
        }

        log::info!(
            "Generated {} pillars ({}x{} lattice)",
            pillars.len(),
            layout.columns,
            layout.rows
        );

        Self { layout, pillars }
    }

    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// Pillar at lattice cell `(column, row)`
    pub fn get(&self, column: usize, row: usize) -> Option<&Pillar> {
        if column >= self.layout.columns || row >= self.layout.rows {
            return None;
        }
        self.pillars.get(self.layout.index(column, row))
    }

    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    /// Issue one box per pillar: `draw_box(center, size, color)`
    pub fn render(&self, mut draw_box: impl FnMut(Vec3, Vec3, NamedColor)) {
        for pillar in &self.pillars {
            draw_box(pillar.center(), pillar.size(), pillar.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    fn grid() -> PillarGrid {
        PillarGrid::generate(GridLayout::default(), &mut Pcg32::seed_from_u64(42))
    }

    #[test]
    fn test_generates_every_lattice_cell() {
        let grid = grid();
        assert_eq!(grid.len(), PILLARS_GRID_WIDTH * PILLARS_GRID_HEIGHT);
        assert_eq!(grid.len(), PILLARS_CAPACITY);

        let mut indices = HashSet::new();
        for column in 0..PILLARS_GRID_WIDTH {
            for row in 0..PILLARS_GRID_HEIGHT {
                assert!(indices.insert(grid.layout.index(column, row)));
                let pillar = grid.get(column, row).unwrap();
                assert_eq!(
                    pillar.grid_position,
                    Vec2::new(
                        column as f32 * PILLARS_GRID_SPACING_X,
                        row as f32 * PILLARS_GRID_SPACING_Y
                    )
                );
                assert_eq!(pillar.height, PILLAR_HEIGHT);
                assert!(NamedColor::PALETTE.contains(&pillar.color));
            }
        }
        assert_eq!(indices.len(), grid.len());
    }

    #[test]
    fn test_linear_index_is_row_major() {
        let layout = GridLayout::default();
        assert_eq!(layout.index(0, 0), 0);
        assert_eq!(layout.index(2, 0), 2);
        assert_eq!(layout.index(0, 1), 3);
        assert_eq!(layout.index(2, 22), 68);
        assert!(grid().get(3, 0).is_none());
    }

    #[test]
    fn test_same_seed_same_colors() {
        let a = grid();
        let b = grid();
        assert_eq!(a.pillars(), b.pillars());
    }

    #[test]
    fn test_custom_layout() {
        let layout = GridLayout {
            columns: 2,
            rows: 2,
            spacing: Vec2::new(3.0, 1.5),
            height: 2.0,
        };
        let grid = PillarGrid::generate(layout, &mut Pcg32::seed_from_u64(7));
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.get(1, 1).unwrap().grid_position, Vec2::new(3.0, 1.5));
    }

    #[test]
    fn test_render_sits_on_ground() {
        let grid = grid();
        let mut boxes = Vec::new();
        grid.render(|center, size, _| boxes.push((center, size)));

        assert_eq!(boxes.len(), grid.len());
        for (center, size) in boxes {
            assert_eq!(center.y - size.y / 2.0, 0.0);
            assert_eq!(size, Vec3::new(PILLAR_SIZE_X, PILLAR_HEIGHT, PILLAR_SIZE_Z));
        }
        let first = grid.pillars()[1];
        assert_eq!(first.center(), Vec3::new(2.0, 2.5, 0.0));
    }

    #[test]
    fn test_palette_rgba() {
        assert_eq!(NamedColor::Gold.rgba(), [1.0, 203.0 / 255.0, 0.0, 1.0]);
        assert_eq!(NamedColor::PALETTE.len(), 18);
    }
}
