//! Terminal rasteriser for the animation surface.
//!
//! One terminal cell covers `PX_PER_COL` x `PX_PER_ROW` device pixels. Thin
//! shapes (streaks, flakes, bolts) become glyphs; broad shapes (clouds, rays,
//! glows, flashes) tint the cell background.

use std::f32::consts::TAU;

use super::surface::{Paint, Point, Rgb, Surface};

pub const PX_PER_COL: f32 = 8.0;
pub const PX_PER_ROW: f32 = 16.0;

const FLAKE_GLYPHS: [char; 4] = ['*', '✻', '✼', '❄'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: Option<char>,
    pub ink: Rgb,
    pub ink_alpha: f32,
    pub wash: Rgb,
    pub wash_alpha: f32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: None,
            ink: Rgb::WHITE,
            ink_alpha: 0.0,
            wash: Rgb::WHITE,
            wash_alpha: 0.0,
        }
    }
}

impl Cell {
    fn apply_wash(&mut self, paint: Paint) {
        let alpha = paint.alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let combined = 1.0 - (1.0 - self.wash_alpha) * (1.0 - alpha);
        self.wash = self.wash.blend(paint.color, alpha / combined);
        self.wash_alpha = combined;
    }

    fn apply_ink(&mut self, glyph: char, paint: Paint) {
        if paint.alpha >= self.ink_alpha {
            self.glyph = Some(glyph);
            self.ink = paint.color;
            self.ink_alpha = paint.alpha.clamp(0.0, 1.0);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CellSurface {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellSurface {
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); usize::from(cols) * usize::from(rows)],
        }
    }

    /// Device-pixel size of a `cols` x `rows` terminal area.
    #[must_use]
    pub fn pixel_size(cols: u16, rows: u16) -> (f32, f32) {
        (f32::from(cols) * PX_PER_COL, f32::from(rows) * PX_PER_ROW)
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.cols) + usize::from(col))
    }

    fn index_at(&self, point: Point) -> Option<usize> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / PX_PER_COL) as usize;
        let row = (point.y / PX_PER_ROW) as usize;
        (col < usize::from(self.cols) && row < usize::from(self.rows))
            .then(|| row * usize::from(self.cols) + col)
    }

    fn cell_center(&self, index: usize) -> Point {
        let cols = usize::from(self.cols).max(1);
        let col = (index % cols) as f32;
        let row = (index / cols) as f32;
        Point::new((col + 0.5) * PX_PER_COL, (row + 0.5) * PX_PER_ROW)
    }

    /// Cell indices whose centers fall inside the pixel box.
    fn indices_in_box(&self, min: Point, max: Point) -> Vec<usize> {
        let cols = i64::from(self.cols);
        let rows = i64::from(self.rows);
        let col_lo = ((min.x / PX_PER_COL).floor() as i64).clamp(0, cols);
        let col_hi = ((max.x / PX_PER_COL).ceil() as i64).clamp(0, cols);
        let row_lo = ((min.y / PX_PER_ROW).floor() as i64).clamp(0, rows);
        let row_hi = ((max.y / PX_PER_ROW).ceil() as i64).clamp(0, rows);
        let mut out = Vec::new();
        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                out.push((row * cols + col) as usize);
            }
        }
        out
    }
}

impl Surface for CellSurface {
    fn width(&self) -> f32 {
        f32::from(self.cols) * PX_PER_COL
    }

    fn height(&self) -> f32 {
        f32::from(self.rows) * PX_PER_ROW
    }

    fn resize(&mut self, width: f32, height: f32) {
        let cols = (width.max(0.0) / PX_PER_COL).round().min(f32::from(u16::MAX)) as u16;
        let rows = (height.max(0.0) / PX_PER_ROW).round().min(f32::from(u16::MAX)) as u16;
        *self = Self::new(cols, rows);
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f32, paint: Paint) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let glyph = line_glyph(dx, dy, line_width);
        let samples = ((dx.hypot(dy) / (PX_PER_COL / 2.0)).ceil() as usize).max(1);
        let mut last = None;
        for step in 0..=samples {
            let t = step as f32 / samples as f32;
            let point = Point::new(from.x + dx * t, from.y + dy * t);
            let Some(index) = self.index_at(point) else {
                continue;
            };
            if last == Some(index) {
                continue;
            }
            last = Some(index);
            self.cells[index].apply_ink(glyph, paint);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, rotation: f32, paint: Paint) {
        if radius * 2.0 < PX_PER_ROW {
            if let Some(index) = self.index_at(center) {
                self.cells[index].apply_ink(flake_glyph(rotation), paint);
            }
            return;
        }
        let min = Point::new(center.x - radius, center.y - radius);
        let max = Point::new(center.x + radius, center.y + radius);
        for index in self.indices_in_box(min, max) {
            let cell_center = self.cell_center(index);
            if distance(cell_center, center) <= radius {
                self.cells[index].apply_wash(paint);
            }
        }
    }

    fn fill_ray(&mut self, anchor: Point, angle: f32, length: f32, _thickness: f32, paint: Paint) {
        let (sin, cos) = angle.sin_cos();
        let samples = ((length / PX_PER_COL).ceil() as usize).max(1);
        let mut last = None;
        for step in 0..=samples {
            let t = step as f32 / samples as f32;
            let offset = (t - 0.5) * length;
            let point = Point::new(anchor.x + cos * offset, anchor.y + sin * offset);
            let Some(index) = self.index_at(point) else {
                continue;
            };
            if last == Some(index) {
                continue;
            }
            last = Some(index);
            let ramp = 1.0 - (2.0 * t - 1.0).abs();
            self.cells[index].apply_wash(Paint::new(paint.color, paint.alpha * ramp));
        }
    }

    fn fill_glow(&mut self, center: Point, radius: f32, paint: Paint) {
        if radius <= 0.0 {
            return;
        }
        let min = Point::new(center.x - radius, center.y - radius);
        let max = Point::new(center.x + radius, center.y + radius);
        for index in self.indices_in_box(min, max) {
            let d = distance(self.cell_center(index), center);
            if d < radius {
                let falloff = 1.0 - d / radius;
                self.cells[index].apply_wash(Paint::new(paint.color, paint.alpha * falloff));
            }
        }
    }

    fn fill_overlay(&mut self, paint: Paint) {
        for cell in &mut self.cells {
            cell.apply_wash(paint);
        }
    }
}

fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

fn line_glyph(dx: f32, dy: f32, line_width: f32) -> char {
    let heavy = line_width >= 3.0;
    if dx.abs() <= dy.abs() * 0.25 {
        if heavy { '┃' } else { '│' }
    } else if dy.abs() <= dx.abs() * 0.25 {
        if heavy { '━' } else { '─' }
    } else if (dx > 0.0) == (dy > 0.0) {
        '╲'
    } else {
        '╱'
    }
}

fn flake_glyph(rotation: f32) -> char {
    let turn = rotation.rem_euclid(TAU) / TAU;
    FLAKE_GLYPHS[((turn * FLAKE_GLYPHS.len() as f32) as usize).min(FLAKE_GLYPHS.len() - 1)]
}
