//! Colors used when drawing rasters onto a canvas.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Minor grid lines.
    pub const GRID: Self = Self::rgb(0xe0, 0xe0, 0xe0);
    /// Major grid lines.
    pub const GRID_MAJOR: Self = Self::rgb(0xc0, 0xc0, 0xc0);
    /// Coordinate axes.
    pub const AXIS: Self = Self::rgb(0x22, 0x22, 0x22);
    /// Highlighted endpoints and circle centers.
    pub const ANCHOR: Self = Self::rgb(0xd6, 0x27, 0x28);
    /// The ideal, unrasterized segment.
    pub const IDEAL_LINE: Self = Self::rgb(0xff, 0x6b, 0x35);
    /// Coordinate labels beside highlighted points.
    pub const LABEL: Self = Self::rgb(0x2e, 0x86, 0xab);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque grey for a raster cell: full coverage is black, zero coverage white.
    #[must_use]
    pub const fn for_coverage(coverage: u8) -> Self {
        let level = 255 - coverage;
        Self::rgb(level, level, level)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}
