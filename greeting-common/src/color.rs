/// RGB color with f32 components in 0..1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }

    /// Build a color from hue (degrees), saturation and lightness (0..1).
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
        let h = hue.rem_euclid(360.) / 60.;
        let s = saturation.clamp(0., 1.);
        let l = lightness.clamp(0., 1.);

        let chroma = (1. - (2. * l - 1.).abs()) * s;
        let x = chroma * (1. - (h % 2. - 1.).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.),
            1 => (x, chroma, 0.),
            2 => (0., chroma, x),
            3 => (0., x, chroma),
            4 => (x, 0., chroma),
            _ => (chroma, 0., x),
        };
        let m = l - chroma / 2.;
        Color::new(r + m, g + m, b + m)
    }

    /// Fully saturated, half-lightness color of the given hue.
    pub fn vivid(hue: f32) -> Color {
        Self::from_hsl(hue, 1., 0.5)
    }

    /// CSS `rgb()` string, alpha is applied separately through the context.
    pub fn to_css(&self) -> String {
        let channel = |v: f32| (v.clamp(0., 1.) * 255.).round() as u8;
        format!("rgb({}, {}, {})", channel(self.r), channel(self.g), channel(self.b))
    }
}
