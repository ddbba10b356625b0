use ratatui::style::Color;

use crate::domain::weather::WeatherCategory;

/// Line colour of the temperature chart.
pub const CHART_LINE: (u8, u8, u8) = (31, 184, 205);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub top: (u8, u8, u8),
    pub bottom: (u8, u8, u8),
    pub capability: ColorCapability,
    pub surface: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub chart: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
}

impl Theme {
    /// Quantised form of an RGB triple for this terminal.
    #[must_use]
    pub fn color(&self, rgb: (u8, u8, u8)) -> Color {
        quantize(Color::Rgb(rgb.0, rgb.1, rgb.2), self.capability)
    }
}

pub fn detect_color_capability() -> ColorCapability {
    detect_color_capability_from(
        std::env::var("TERM").ok().as_deref(),
        std::env::var("COLORTERM").ok().as_deref(),
        std::env::var("NO_COLOR").ok().as_deref(),
    )
}

pub(crate) fn detect_color_capability_from(
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> ColorCapability {
    let term = term.unwrap_or_default().to_lowercase();
    if no_color.is_some_and(|value| !value.is_empty()) || term == "dumb" {
        return ColorCapability::Basic16;
    }
    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        ColorCapability::TrueColor
    } else if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

/// Palette for the backdrop and panels. `None` is the neutral pre-weather sky.
pub fn theme_for(category: Option<WeatherCategory>, capability: ColorCapability) -> Theme {
    let (top, bottom, accent) = match category {
        None | Some(WeatherCategory::Clear) => ((13, 53, 102), (30, 102, 158), (255, 215, 117)),
        Some(WeatherCategory::Cloudy) => ((25, 36, 51), (48, 63, 84), (210, 223, 235)),
        Some(WeatherCategory::Rain) => ((17, 47, 88), (32, 73, 126), (153, 214, 255)),
        Some(WeatherCategory::Snow) => ((27, 51, 77), (43, 74, 106), (237, 247, 255)),
        Some(WeatherCategory::Thunderstorm) => ((28, 25, 66), (42, 40, 97), (255, 223, 112)),
    };

    let surface = mix_rgb(bottom, (0, 0, 0), 0.35);
    let text = ensure_contrast((241, 245, 249), surface, 7.0);
    let muted = ensure_contrast(mix_rgb(text, surface, 0.35), surface, 4.5);
    let accent = ensure_contrast(accent, surface, 4.5);
    let border = ensure_contrast(mix_rgb(surface, accent, 0.5), surface, 2.25);
    let on_surface = |seed: (u8, u8, u8)| ensure_contrast(seed, surface, 3.0);

    let q = |rgb: (u8, u8, u8)| quantize(Color::Rgb(rgb.0, rgb.1, rgb.2), capability);
    Theme {
        top,
        bottom,
        capability,
        surface: q(surface),
        accent: q(accent),
        text: q(text),
        muted_text: q(muted),
        border: q(border),
        chart: q(on_surface(CHART_LINE)),
        info: q(on_surface((125, 211, 252))),
        warning: q(on_surface((251, 191, 36))),
        danger: q(on_surface((248, 113, 113))),
        temp_cold: q(on_surface((56, 189, 248))),
        temp_mild: q(on_surface((110, 231, 183))),
        temp_warm: q(on_surface((251, 191, 36))),
        temp_hot: q(on_surface((248, 113, 113))),
    }
}

pub fn temp_color(theme: &Theme, celsius: f32) -> Color {
    if celsius <= 2.0 {
        theme.temp_cold
    } else if celsius <= 16.0 {
        theme.temp_mild
    } else if celsius <= 28.0 {
        theme.temp_warm
    } else {
        theme.temp_hot
    }
}

pub fn condition_color(theme: &Theme, category: WeatherCategory) -> Color {
    match category {
        WeatherCategory::Clear => theme.warning,
        WeatherCategory::Cloudy => theme.muted_text,
        WeatherCategory::Rain => theme.info,
        WeatherCategory::Snow => theme.text,
        WeatherCategory::Thunderstorm => theme.danger,
    }
}

pub fn mix_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| -> u8 {
        (f32::from(x) + (f32::from(y) - f32::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Nudges `fg` towards black or white until it reaches `min_ratio` against `bg`.
fn ensure_contrast(fg: (u8, u8, u8), bg: (u8, u8, u8), min_ratio: f32) -> (u8, u8, u8) {
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }
    let target = if contrast_ratio((255, 255, 255), bg) >= contrast_ratio((0, 0, 0), bg) {
        (255, 255, 255)
    } else {
        (0, 0, 0)
    };
    (1..=24)
        .map(|step| mix_rgb(fg, target, step as f32 / 24.0))
        .find(|candidate| contrast_ratio(*candidate, bg) >= min_ratio)
        .unwrap_or(target)
}

fn contrast_ratio(a: (u8, u8, u8), b: (u8, u8, u8)) -> f32 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

fn relative_luminance(rgb: (u8, u8, u8)) -> f32 {
    let linear = |v: u8| {
        let s = f32::from(v) / 255.0;
        if s <= 0.04045 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(rgb.0) + 0.7152 * linear(rgb.1) + 0.0722 * linear(rgb.2)
}

pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;
    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };
    let bright = light >= 0.55;
    let (dim, lit) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if bright { lit } else { dim }
}
