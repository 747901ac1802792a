use crate::core::annotate::ScoreStyles;

/// A color representation for the terminal - using RGB for precise color control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
}

/// Helper macro to create RGB colors from hex values
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        Color::Rgb {
            r: $r,
            g: $g,
            b: $b,
        }
    };
}

/// Channel levels of the xterm 6x6x6 color cube
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

fn cube_index(v: u8) -> u8 {
    match v {
        0..48 => 0,
        48..115 => 1,
        _ => (v - 35) / 40,
    }
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (x as i32 - y as i32).unsigned_abs().pow(2);
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

impl Color {
    /// Convert to a crossterm color, optionally degrading to the xterm-256 palette
    pub fn to_crossterm(self, truecolor: bool) -> crossterm::style::Color {
        let Color::Rgb { r, g, b } = self;
        if truecolor {
            crossterm::style::Color::Rgb { r, g, b }
        } else {
            crossterm::style::Color::AnsiValue(self.to_ansi256())
        }
    }

    /// Nearest entry of the xterm-256 palette, cube or gray ramp
    pub fn to_ansi256(self) -> u8 {
        let Color::Rgb { r, g, b } = self;
        let (ri, gi, bi) = (cube_index(r), cube_index(g), cube_index(b));
        let cube = (
            CUBE_LEVELS[ri as usize],
            CUBE_LEVELS[gi as usize],
            CUBE_LEVELS[bi as usize],
        );

        let avg = (r as u32 + g as u32 + b as u32) / 3;
        let gray_idx = (avg.saturating_sub(3) / 10).min(23) as u8;
        let level = 8 + gray_idx * 10;

        if distance((r, g, b), (level, level, level)) < distance((r, g, b), cube) {
            232 + gray_idx
        } else {
            16 + 36 * ri + 6 * gi + bi
        }
    }
}

/// Base colors for text and chrome
#[derive(Clone, Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
}

/// Represents a color theme for the viewer
///
/// `scores` holds one sentence background per normalized score, easiest
/// first. `fallback_scores` is the same ramp as xterm-256 indices, picked by
/// hand because nearest-color matching collapses dark ramps.
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
    pub scores: ScoreStyles<Color>,
    pub fallback_scores: ScoreStyles<u8>,
}

impl Theme {
    pub fn new(
        name: impl Into<String>,
        palette: Palette,
        scores: ScoreStyles<Color>,
        fallback_scores: ScoreStyles<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            palette,
            scores,
            fallback_scores,
        }
    }

    /// Look up a built-in theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Some(Self::default_dark()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    /// Names accepted by [`Theme::by_name`]
    pub fn names() -> &'static [&'static str] {
        &["default", "mono"]
    }

    /// Dark background, scores from calm green through amber to red
    pub fn default_dark() -> Self {
        let palette = Palette {
            bg: rgb!(0x1e, 0x1f, 0x22),
            fg: rgb!(0xdc, 0xdc, 0xd8),
            status_bg: rgb!(0x3a, 0x6e, 0xa5),
            status_fg: rgb!(0x1e, 0x1f, 0x22),
        };
        let scores = ScoreStyles::new([
            rgb!(0x1e, 0x1f, 0x22),
            rgb!(0x1f, 0x33, 0x26),
            rgb!(0x24, 0x3d, 0x27),
            rgb!(0x2f, 0x45, 0x25),
            rgb!(0x3d, 0x4a, 0x22),
            rgb!(0x4b, 0x4a, 0x1f),
            rgb!(0x57, 0x44, 0x1d),
            rgb!(0x5e, 0x3a, 0x1c),
            rgb!(0x63, 0x2f, 0x1d),
            rgb!(0x68, 0x25, 0x20),
            rgb!(0x70, 0x1c, 0x24),
        ]);
        let fallback = ScoreStyles::new([234, 22, 28, 64, 58, 100, 94, 130, 166, 124, 160]);
        Self::new("default", palette, scores, fallback)
    }

    /// Gray ramp for terminals where hue is unreliable
    pub fn mono() -> Self {
        let palette = Palette {
            bg: rgb!(0x10, 0x10, 0x10),
            fg: rgb!(0xe8, 0xe8, 0xe8),
            status_bg: rgb!(0xb0, 0xb0, 0xb0),
            status_fg: rgb!(0x10, 0x10, 0x10),
        };
        let scores = ScoreStyles::new(std::array::from_fn(|score| {
            let level = 0x10 + (score as u8) * 0x0c;
            rgb!(level, level, level)
        }));
        let fallback = ScoreStyles::new(std::array::from_fn(|score| 233 + score as u8));
        Self::new("mono", palette, scores, fallback)
    }

    /// Background for a sentence with `score`
    pub fn score_bg(&self, score: u8) -> Color {
        *self.scores.style_for(score)
    }

    /// Terminal color for a sentence with `score`
    pub fn score_color(&self, score: u8, truecolor: bool) -> crossterm::style::Color {
        if truecolor {
            self.score_bg(score).to_crossterm(true)
        } else {
            crossterm::style::Color::AnsiValue(*self.fallback_scores.style_for(score))
        }
    }
}
