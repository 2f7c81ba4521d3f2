use crate::foundation::core::Rgba8;

/// Motif family drawn along a frame border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// Repeating hearts.
    Heart,
    /// Repeating five-pointed stars.
    Star,
    /// Repeating five-petal flowers.
    Flower,
    /// Double-line border with triangular corner accents.
    Simple,
}

impl PatternType {
    /// Distance between edge motifs, as a multiple of the motif size.
    pub fn spacing_factor(self) -> f64 {
        match self {
            Self::Heart => 2.5,
            Self::Star | Self::Flower => 2.8,
            Self::Simple => 0.0,
        }
    }

    /// Scale applied to the four corner motifs.
    pub fn corner_scale(self) -> f64 {
        match self {
            Self::Heart => 1.2,
            Self::Star => 1.5,
            Self::Flower => 1.3,
            Self::Simple => 1.0,
        }
    }
}

/// Static style descriptor for a decorative frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameConfig {
    /// Template id (1-based).
    pub id: u32,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Solid background, used when `gradient_stops` is absent.
    pub background: Rgba8,
    /// Evenly spaced stops of a top-left to bottom-right background gradient.
    pub gradient_stops: Option<&'static [Rgba8]>,
    /// Motif and line color.
    pub pattern_color: Rgba8,
    /// Motif family.
    pub pattern: PatternType,
    /// Photo counts the template was designed for.
    pub suggested_counts: &'static [usize],
}

const STARRY_NIGHT_STOPS: [Rgba8; 2] = [Rgba8::rgb(0x1e, 0x3c, 0x72), Rgba8::rgb(0x2a, 0x52, 0x98)];
const CANDY_LOVE_STOPS: [Rgba8; 2] = [Rgba8::rgb(0xff, 0xdd, 0xe1), Rgba8::rgb(0xee, 0x9c, 0xa7)];
const SPRING_BLOSSOM_STOPS: [Rgba8; 3] = [
    Rgba8::rgb(0xfd, 0xfc, 0xfb),
    Rgba8::rgb(0xff, 0xe0, 0xb2),
    Rgba8::rgb(0xe2, 0xd1, 0xc3),
];

static FRAME_CONFIGS: [FrameConfig; 8] = [
    FrameConfig {
        id: 1,
        name: "Sweet Heart",
        description: "Pink hearts on a blush background",
        background: Rgba8::rgb(0xff, 0xe4, 0xec),
        gradient_stops: None,
        pattern_color: Rgba8::rgb(0xff, 0x69, 0xb4),
        pattern: PatternType::Heart,
        suggested_counts: &[3],
    },
    FrameConfig {
        id: 2,
        name: "Starry Night",
        description: "Golden stars over a deep blue gradient",
        background: Rgba8::rgb(0x1e, 0x3c, 0x72),
        gradient_stops: Some(&STARRY_NIGHT_STOPS),
        pattern_color: Rgba8::rgb(0xff, 0xd7, 0x00),
        pattern: PatternType::Star,
        suggested_counts: &[4],
    },
    FrameConfig {
        id: 3,
        name: "Flower Garden",
        description: "Soft pink blossoms on a mint background",
        background: Rgba8::rgb(0xf0, 0xff, 0xf0),
        gradient_stops: None,
        pattern_color: Rgba8::rgb(0xff, 0x8f, 0xab),
        pattern: PatternType::Flower,
        suggested_counts: &[6],
    },
    FrameConfig {
        id: 4,
        name: "Elegant Classic",
        description: "Clean double-line border on white",
        background: Rgba8::WHITE,
        gradient_stops: None,
        pattern_color: Rgba8::rgb(0x33, 0x33, 0x33),
        pattern: PatternType::Simple,
        suggested_counts: &[3, 4, 6],
    },
    FrameConfig {
        id: 5,
        name: "Candy Love",
        description: "White hearts over a candy pink gradient",
        background: Rgba8::rgb(0xff, 0xdd, 0xe1),
        gradient_stops: Some(&CANDY_LOVE_STOPS),
        pattern_color: Rgba8::WHITE,
        pattern: PatternType::Heart,
        suggested_counts: &[3, 4],
    },
    FrameConfig {
        id: 6,
        name: "Golden Star",
        description: "Amber stars on warm cream",
        background: Rgba8::rgb(0xff, 0xf8, 0xe1),
        gradient_stops: None,
        pattern_color: Rgba8::rgb(0xff, 0xb3, 0x00),
        pattern: PatternType::Star,
        suggested_counts: &[4, 6],
    },
    FrameConfig {
        id: 7,
        name: "Spring Blossom",
        description: "Magenta flowers over a sunrise gradient",
        background: Rgba8::rgb(0xfd, 0xfc, 0xfb),
        gradient_stops: Some(&SPRING_BLOSSOM_STOPS),
        pattern_color: Rgba8::rgb(0xe9, 0x1e, 0x63),
        pattern: PatternType::Flower,
        suggested_counts: &[6],
    },
    FrameConfig {
        id: 8,
        name: "Mint Minimal",
        description: "Green double-line border on pale mint",
        background: Rgba8::rgb(0xe0, 0xf7, 0xf4),
        gradient_stops: None,
        pattern_color: Rgba8::rgb(0x2e, 0x8b, 0x57),
        pattern: PatternType::Simple,
        suggested_counts: &[3, 4, 6],
    },
];

/// All predefined frame configurations, ordered by id.
pub fn frame_configs() -> &'static [FrameConfig] {
    &FRAME_CONFIGS
}

/// Look up a frame configuration by template id.
pub fn frame_config(id: u32) -> Option<&'static FrameConfig> {
    FRAME_CONFIGS.iter().find(|c| c.id == id)
}

/// Look up a frame configuration, falling back to the first one for unknown ids.
pub fn resolve_frame_config(id: u32) -> &'static FrameConfig {
    frame_config(id).unwrap_or_else(|| {
        tracing::warn!(template_id = id, "unknown template id, using the default frame");
        &FRAME_CONFIGS[0]
    })
}

#[cfg(test)]
#[path = "../../tests/unit/frame/config.rs"]
mod tests;
