use crate::brush::Color;

/// Persistent off-screen pixel surface holding everything painted so far,
/// stored row-major as RGBA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    cell_size: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub const BACKGROUND: Color = Color::WHITE;
    pub const GRID_COLOR: Color = Color::LIGHT_GRAY;

    /// Creates a blank canvas with the grid overlay already drawn.
    #[must_use]
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            cell_size,
            pixels: vec![Self::BACKGROUND; width as usize * height as usize],
        };
        canvas.clear();
        canvas
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Resets to white and redraws the grid, dropping all strokes.
    pub fn clear(&mut self) {
        self.pixels.fill(Self::BACKGROUND);
        draw_grid(self, self.cell_size, Self::GRID_COLOR);
    }

    /// Overwrites a `side` x `side` square whose top-left corner is at
    /// `(x, y)`. Anything past the right or bottom edge is dropped.
    pub fn fill_square(&mut self, x: u32, y: u32, side: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let x_end = x.saturating_add(side).min(self.width);
        let y_end = y.saturating_add(side).min(self.height);
        for row in y..y_end {
            let start = self.index(x, row);
            let end = self.index(x_end, row);
            self.pixels[start..end].fill(color);
        }
    }

    const fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Draws one-pixel lines at every multiple of `cell_size` on both axes.
pub fn draw_grid(canvas: &mut Canvas, cell_size: u32, color: Color) {
    if cell_size == 0 {
        return;
    }
    let (width, height) = (canvas.width, canvas.height);
    for x in (0..width).step_by(cell_size as usize) {
        for y in 0..height {
            let i = canvas.index(x, y);
            canvas.pixels[i] = color;
        }
    }
    for y in (0..height).step_by(cell_size as usize) {
        let start = canvas.index(0, y);
        let end = start + width as usize;
        canvas.pixels[start..end].fill(color);
    }
}
