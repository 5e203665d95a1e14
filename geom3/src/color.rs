use serde::{Deserialize, Serialize};

/// Gamma-space color, as picked by humans and stored in configs.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const GREEN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };

    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };

    pub const CYAN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const MAGENTA: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
}

/// Linear-space color, what renderers blend with.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for LinearColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl LinearColor {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        LinearColor { r, g, b, a }
    }

    pub const TRANSPARENT: LinearColor = LinearColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const WHITE: LinearColor = LinearColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const BLACK: LinearColor = LinearColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}

pub fn from_srgb(component: f32) -> f32 {
    let a = 0.055;
    if component <= 0.04045 {
        component / 12.92
    } else {
        ((component + a) / (1.0 + a)).powf(2.4)
    }
}

pub fn to_srgb(component: f32) -> f32 {
    let a = 0.055;
    if component <= 0.0031308 {
        component * 12.92
    } else {
        (1.0 + a) * component.powf(1.0 / 2.4) - a
    }
}

impl From<Color> for LinearColor {
    fn from(color: Color) -> Self {
        LinearColor {
            r: from_srgb(color.r),
            g: from_srgb(color.g),
            b: from_srgb(color.b),
            a: color.a,
        }
    }
}

impl From<LinearColor> for Color {
    fn from(lcolor: LinearColor) -> Self {
        Color {
            r: to_srgb(lcolor.r),
            g: to_srgb(lcolor.g),
            b: to_srgb(lcolor.b),
            a: lcolor.a,
        }
    }
}

impl From<LinearColor> for [f32; 4] {
    #[inline]
    fn from(x: LinearColor) -> [f32; 4] {
        [x.r, x.g, x.b, x.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_roundtrip() {
        for &v in &[0.0, 0.02, 0.2, 0.5, 1.0] {
            assert!((to_srgb(from_srgb(v)) - v).abs() < 1e-5);
        }
        // pure channels survive the gamma conversion exactly
        assert_eq!(LinearColor::from(Color::RED).r, 1.0);
        assert_eq!(LinearColor::from(Color::RED).g, 0.0);
    }

    #[test]
    fn test_gamma_roundtrip() {
        let c = Color::new(0.8, 0.3, 0.05, 0.5);
        let back = Color::from(LinearColor::from(c));
        assert!((back.r - c.r).abs() < 1e-5);
        assert!((back.g - c.g).abs() < 1e-5);
        assert!((back.b - c.b).abs() < 1e-5);
        assert_eq!(back.a, c.a);

        let arr: [f32; 4] = LinearColor::new(0.1, 0.2, 0.3, 1.0).into();
        assert_eq!(arr, [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex(0xFF0000), Color::RED);
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
    }
}
