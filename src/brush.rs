#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Self = Self::rgb(200, 200, 200);
}

/// Colors selectable with the number keys, in key order.
pub const PALETTE: [Color; 8] = [
    Color::BLACK,
    Color::rgb(0, 0, 255),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 0, 0),
    Color::rgb(255, 0, 255),
    Color::rgb(255, 255, 0),
    Color::WHITE,
];

/// Square brush measured in grid cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brush {
    cells: u32,
    color: Color,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            cells: Self::BRUSH_MIN,
            color: Color::BLACK,
        }
    }
}

impl Brush {
    const BRUSH_MIN: u32 = 1;
    const BRUSH_MAX: u32 = 10;

    #[must_use]
    pub const fn cells(&self) -> u32 {
        self.cells
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Side length of the brush in pixels.
    #[must_use]
    pub const fn side(&self, cell_size: u32) -> u32 {
        self.cells * cell_size
    }

    pub fn inc_size(&mut self) {
        if self.cells < Self::BRUSH_MAX {
            self.cells += 1;
        }
    }

    pub fn dec_size(&mut self) {
        if self.cells > Self::BRUSH_MIN {
            self.cells -= 1;
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Selects a palette entry; out of range indices leave the color alone.
    pub fn select(&mut self, index: usize) {
        if let Some(&color) = PALETTE.get(index) {
            self.set_color(color);
        }
    }
}
