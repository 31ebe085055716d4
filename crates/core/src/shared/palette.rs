use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Ten visually distinct colours for annotating clusters.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0xe6, 0x19, 0x4b),
    Rgb::new(0xf5, 0x82, 0x31),
    Rgb::new(0xff, 0xe1, 0x19),
    Rgb::new(0xbc, 0xf6, 0x0c),
    Rgb::new(0x3c, 0xb4, 0x4b),
    Rgb::new(0x46, 0xf0, 0xf0),
    Rgb::new(0x43, 0x63, 0xd8),
    Rgb::new(0x91, 0x1e, 0xb4),
    Rgb::new(0xf0, 0x32, 0xe6),
    Rgb::new(0x80, 0x80, 0x80),
];

/// Colour for a cluster label. Wraps around once labels exceed the palette.
pub fn color_for_label(label: usize) -> Rgb {
    PALETTE[label % PALETTE.len()]
}
