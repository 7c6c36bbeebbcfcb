use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel color unpacked from a 32-bit ARGB integer.
///
/// Bit layout: alpha 24–31, red 16–23, green 8–15, blue 0–7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ArgbColor {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ArgbColor {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_argb(argb: i32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { a, r, g, b }
    }

    pub const fn to_argb(self) -> i32 {
        i32::from_be_bytes([self.a, self.r, self.g, self.b])
    }
}

impl From<i32> for ArgbColor {
    fn from(argb: i32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<ArgbColor> for i32 {
    fn from(color: ArgbColor) -> Self {
        color.to_argb()
    }
}
