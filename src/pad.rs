use log::debug;

use crate::{
    brush::{Brush, Color},
    canvas::Canvas,
    config::PadConfig,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Unit step on each axis, y growing downwards.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (1, -1),
            Self::DownLeft => (-1, 1),
            Self::DownRight => (1, 1),
        }
    }
}

/// Discrete input the pad reacts to, already decoupled from the windowing library.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PadEvent {
    Move(Direction),
    PaintDown,
    PaintUp,
    GrowBrush,
    ShrinkBrush,
    /// Zero based palette index.
    SelectColor(usize),
    Clear,
    Quit,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

/// Loop state of the drawing pad: everything but the canvas itself.
#[derive(Clone, Debug)]
pub struct Pad {
    width: i32,
    height: i32,
    cell_size: i32,
    cursor: Cursor,
    brush: Brush,
    drawing: bool,
    running: bool,
}

impl Pad {
    #[allow(clippy::cast_possible_wrap)]
    #[must_use]
    pub fn new(config: &PadConfig) -> Self {
        Self {
            width: config.width as i32,
            height: config.height as i32,
            cell_size: config.cell_size() as i32,
            cursor: Cursor::default(),
            brush: Brush::default(),
            drawing: false,
            running: true,
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn brush(&self) -> &Brush {
        &self.brush
    }

    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn brush_side(&self) -> i32 {
        self.brush.cells() as i32 * self.cell_size
    }

    /// Runs one frame worth of state updates: applies `events` in order, then
    /// clamps and snaps the cursor, then paints if the paint key is held.
    pub fn step<I>(&mut self, events: I, canvas: &mut Canvas)
    where
        I: IntoIterator<Item = PadEvent>,
    {
        for event in events {
            self.apply(event, canvas);
        }
        self.clamp_cursor();
        self.snap_cursor();
        if self.drawing {
            self.paint(canvas);
        }
    }

    /// Applies a single event. Cursor moves are not bounded here; that
    /// happens once per frame in [`Pad::step`].
    pub fn apply(&mut self, event: PadEvent, canvas: &mut Canvas) {
        debug!("pad event {event:?}");
        match event {
            PadEvent::Move(direction) => {
                let (dx, dy) = direction.delta();
                let side = self.brush_side();
                self.cursor.x += dx * side;
                self.cursor.y += dy * side;
            }
            PadEvent::PaintDown => self.drawing = true,
            PadEvent::PaintUp => self.drawing = false,
            PadEvent::GrowBrush => self.brush.inc_size(),
            PadEvent::ShrinkBrush => self.brush.dec_size(),
            PadEvent::SelectColor(index) => self.brush.select(index),
            PadEvent::Clear => canvas.clear(),
            PadEvent::Quit => self.running = false,
        }
    }

    /// Past the right or bottom edge the cursor lands one base cell short of
    /// the edge, whatever the brush size.
    fn clamp_cursor(&mut self) {
        self.cursor.x = clamp_axis(self.cursor.x, self.width, self.cell_size);
        self.cursor.y = clamp_axis(self.cursor.y, self.height, self.cell_size);
    }

    fn snap_cursor(&mut self) {
        let side = self.brush_side();
        if side > 0 {
            self.cursor.x = self.cursor.x / side * side;
            self.cursor.y = self.cursor.y / side * side;
        }
    }

    fn paint(&self, canvas: &mut Canvas) {
        let color: Color = self.brush.color();
        canvas.fill_square(
            self.cursor.x.unsigned_abs(),
            self.cursor.y.unsigned_abs(),
            self.brush_side().unsigned_abs(),
            color,
        );
    }
}

const fn clamp_axis(value: i32, limit: i32, cell_size: i32) -> i32 {
    if value < 0 {
        0
    } else if value >= limit {
        limit - cell_size
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::PALETTE;

    fn setup() -> (Pad, Canvas) {
        let config = PadConfig::default();
        let canvas = Canvas::new(config.width, config.height, config.cell_size());
        (Pad::new(&config), canvas)
    }

    #[test]
    fn moving_right_and_down_stops_one_cell_short_of_edge() {
        let (mut pad, mut canvas) = setup();
        for _ in 0..200 {
            pad.step([PadEvent::Move(Direction::DownRight)], &mut canvas);
            let cursor = pad.cursor();
            assert!((0..800).contains(&cursor.x));
            assert!((0..800).contains(&cursor.y));
        }
        assert_eq!(pad.cursor(), Cursor { x: 792, y: 792 });
    }

    #[test]
    fn moving_left_and_up_stops_at_origin() {
        let (mut pad, mut canvas) = setup();
        pad.step(
            [
                PadEvent::Move(Direction::UpLeft),
                PadEvent::Move(Direction::Up),
                PadEvent::Move(Direction::Left),
            ],
            &mut canvas,
        );
        assert_eq!(pad.cursor(), Cursor { x: 0, y: 0 });
    }

    #[test]
    fn wide_brush_clamps_by_cell_then_snaps_by_brush() {
        let (mut pad, mut canvas) = setup();
        let grow = std::iter::repeat(PadEvent::GrowBrush).take(9);
        pad.step(grow, &mut canvas);
        assert_eq!(pad.brush().cells(), 10);
        for _ in 0..20 {
            pad.step([PadEvent::Move(Direction::Right)], &mut canvas);
        }
        // 720 + 80 hits the edge, clamps to 792, then snaps down to 720.
        assert_eq!(pad.cursor().x, 720);

        let (mut pad, mut canvas) = setup();
        pad.step([PadEvent::GrowBrush, PadEvent::GrowBrush], &mut canvas);
        for _ in 0..40 {
            pad.step([PadEvent::Move(Direction::Right)], &mut canvas);
        }
        // A 24 pixel brush lands on 792, so its square overhangs the edge.
        assert_eq!(pad.cursor().x, 792);
        pad.step([PadEvent::PaintDown], &mut canvas);
        assert_eq!(canvas.pixel(799, 0), Some(Color::BLACK));
    }

    #[test]
    fn brush_size_saturates() {
        let (mut pad, mut canvas) = setup();
        pad.step(std::iter::repeat(PadEvent::GrowBrush).take(50), &mut canvas);
        assert_eq!(pad.brush().cells(), 10);
        pad.step(std::iter::repeat(PadEvent::ShrinkBrush).take(50), &mut canvas);
        assert_eq!(pad.brush().cells(), 1);
    }

    #[test]
    fn brush_change_resnaps_cursor_next_frame() {
        let (mut pad, mut canvas) = setup();
        pad.step([PadEvent::Move(Direction::Right)], &mut canvas);
        assert_eq!(pad.cursor().x, 8);
        pad.step([PadEvent::GrowBrush], &mut canvas);
        assert_eq!(pad.cursor().x, 0);
    }

    #[test]
    fn clear_discards_strokes() {
        let (mut pad, mut canvas) = setup();
        let blank = canvas.clone();
        pad.step([PadEvent::PaintDown, PadEvent::Move(Direction::Right)], &mut canvas);
        pad.step([PadEvent::PaintUp], &mut canvas);
        assert_ne!(canvas, blank);
        pad.step([PadEvent::Clear], &mut canvas);
        assert_eq!(canvas, blank);
    }

    #[test]
    fn last_paint_wins() {
        let (mut pad, mut canvas) = setup();
        pad.step(
            [PadEvent::SelectColor(4), PadEvent::PaintDown],
            &mut canvas,
        );
        assert_eq!(canvas.pixel(0, 0), Some(PALETTE[4]));
        pad.step(
            [PadEvent::PaintUp, PadEvent::SelectColor(1), PadEvent::PaintDown],
            &mut canvas,
        );
        assert_eq!(canvas.pixel(0, 0), Some(PALETTE[1]));
        assert_eq!(canvas.pixel(7, 7), Some(PALETTE[1]));
        assert_eq!(canvas.pixel(8, 8), Some(Canvas::GRID_COLOR));
    }

    #[test]
    fn releasing_paint_key_stops_painting() {
        let (mut pad, mut canvas) = setup();
        let ink = Color::BLACK;
        pad.step([PadEvent::Move(Direction::Right)], &mut canvas);
        pad.step([PadEvent::PaintDown], &mut canvas);
        pad.step([PadEvent::Move(Direction::Right)], &mut canvas);
        pad.step([PadEvent::PaintUp], &mut canvas);
        pad.step([PadEvent::Move(Direction::Right)], &mut canvas);

        assert!(!pad.is_drawing());
        assert_eq!(canvas.pixel(1, 1), Some(Canvas::BACKGROUND));
        assert_eq!(canvas.pixel(9, 1), Some(ink));
        assert_eq!(canvas.pixel(17, 1), Some(ink));
        assert_eq!(canvas.pixel(25, 1), Some(Canvas::BACKGROUND));
    }

    #[test]
    fn selected_color_is_used_regardless_of_previous() {
        let (mut pad, mut canvas) = setup();
        pad.step(
            [PadEvent::SelectColor(6), PadEvent::SelectColor(2), PadEvent::PaintDown],
            &mut canvas,
        );
        assert_eq!(canvas.pixel(3, 3), Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn clear_after_moves_and_paint_key() {
        let (mut pad, mut canvas) = setup();
        let blank = canvas.clone();
        for _ in 0..5 {
            pad.step([PadEvent::Move(Direction::Right)], &mut canvas);
        }
        pad.step([PadEvent::PaintDown], &mut canvas);
        assert_eq!(canvas.pixel(41, 1), Some(Color::BLACK));
        pad.step([PadEvent::PaintUp, PadEvent::Clear], &mut canvas);

        assert_eq!(pad.cursor(), Cursor { x: 40, y: 0 });
        assert_eq!(canvas, blank);
    }

    #[test]
    fn held_paint_key_repaints_after_clear_in_same_frame() {
        let (mut pad, mut canvas) = setup();
        pad.step(
            [PadEvent::Move(Direction::Down), PadEvent::PaintDown, PadEvent::Clear],
            &mut canvas,
        );
        assert_eq!(canvas.pixel(1, 9), Some(Color::BLACK));
        assert_eq!(canvas.pixel(1, 1), Some(Canvas::BACKGROUND));
    }

    #[test]
    fn quit_stops_running() {
        let (mut pad, mut canvas) = setup();
        assert!(pad.is_running());
        pad.step([PadEvent::Quit], &mut canvas);
        assert!(!pad.is_running());
    }
}
