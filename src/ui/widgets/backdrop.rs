use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{
    animation::{Cell, CellSurface, Rgb},
    ui::theme::{Theme, mix_rgb},
};

type Rgb8 = (u8, u8, u8);

/// Glyphs never fade below this share of their ink colour.
const MIN_INK: f32 = 0.35;

/// Sky gradient with the animation surface composited on top.
///
/// Surface cell `(0, 0)` maps to the top-left corner of the rendered area.
pub struct Backdrop<'a> {
    pub theme: &'a Theme,
    pub surface: Option<&'a CellSurface>,
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            let sky = mix_rgb(self.theme.top, self.theme.bottom, gradient_ratio(area, y));
            for x in area.left()..area.right() {
                let animated = self
                    .surface
                    .and_then(|surface| surface.cell(x - area.x, y - area.y));
                let (bg, glyph) = composite(sky, animated);
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                cell.set_char(' ').set_bg(self.theme.color(bg));
                if let Some((ch, fg)) = glyph {
                    cell.set_char(ch).set_fg(self.theme.color(fg));
                }
            }
        }
    }
}

/// Background colour and optional glyph for one terminal cell.
fn composite(sky: Rgb8, cell: Option<&Cell>) -> (Rgb8, Option<(char, Rgb8)>) {
    let Some(cell) = cell else {
        return (sky, None);
    };
    let bg = mix_rgb(sky, rgb8(cell.wash), cell.wash_alpha);
    let glyph = cell
        .glyph
        .map(|ch| (ch, mix_rgb(bg, rgb8(cell.ink), cell.ink_alpha.max(MIN_INK))));
    (bg, glyph)
}

fn rgb8(color: Rgb) -> Rgb8 {
    (color.r, color.g, color.b)
}

fn gradient_ratio(area: Rect, y: u16) -> f32 {
    if area.height <= 1 {
        0.0
    } else {
        f32::from(y - area.top()) / f32::from(area.height - 1)
    }
}
