//! Drawing surface abstraction used by the animation renderer.
//!
//! Coordinates are device pixels with the origin at the top-left corner and `y`
//! growing downwards. Alpha values are `0.0..=1.0`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `hue` in degrees, `saturation` and `lightness` in `0.0..=1.0`.
    #[must_use]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r1), channel(g1), channel(b1))
    }

    /// Composites `top` over `self` with coverage `alpha`.
    #[must_use]
    pub fn blend(self, top: Self, alpha: f32) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |under: u8, over: u8| {
            (f32::from(under) + (f32::from(over) - f32::from(under)) * a).round() as u8
        };
        Self::new(mix(self.r, top.r), mix(self.g, top.g), mix(self.b, top.b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Stroke or fill style shared by the drawing primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f32,
}

impl Paint {
    #[must_use]
    pub const fn new(color: Rgb, alpha: f32) -> Self {
        Self { color, alpha }
    }
}

pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn resize(&mut self, width: f32, height: f32);
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f32, paint: Paint);

    fn stroke_polyline(&mut self, points: &[Point], line_width: f32, paint: Paint) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], line_width, paint);
        }
    }

    /// Filled circle rotated by `rotation` radians around its center.
    fn fill_circle(&mut self, center: Point, radius: f32, rotation: f32, paint: Paint);

    /// Bar of `length` centered on `anchor`, rotated by `angle`, whose alpha ramps
    /// from transparent at both ends to `paint.alpha` in the middle.
    fn fill_ray(&mut self, anchor: Point, angle: f32, length: f32, thickness: f32, paint: Paint);

    /// Radial gradient from `paint` at the center to transparent at `radius`.
    fn fill_glow(&mut self, center: Point, radius: f32, paint: Paint);

    /// Whole-surface translucent overlay.
    fn fill_overlay(&mut self, paint: Paint);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        line_width: f32,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f32,
        rotation: f32,
        paint: Paint,
    },
    Ray {
        anchor: Point,
        angle: f32,
        length: f32,
        paint: Paint,
    },
    Glow {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    Polyline {
        points: Vec<Point>,
        paint: Paint,
    },
    Overlay {
        paint: Paint,
    },
}

/// Surface that records draw commands instead of rasterising them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn draw_calls(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f32, paint: Paint) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            line_width,
            paint,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], _line_width: f32, paint: Paint) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            paint,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, rotation: f32, paint: Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            rotation,
            paint,
        });
    }

    fn fill_ray(&mut self, anchor: Point, angle: f32, length: f32, _thickness: f32, paint: Paint) {
        self.commands.push(DrawCommand::Ray {
            anchor,
            angle,
            length,
            paint,
        });
    }

    fn fill_glow(&mut self, center: Point, radius: f32, paint: Paint) {
        self.commands.push(DrawCommand::Glow {
            center,
            radius,
            paint,
        });
    }

    fn fill_overlay(&mut self, paint: Paint) {
        self.commands.push(DrawCommand::Overlay { paint });
    }
}
