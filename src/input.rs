use winit::event::{ElementState, KeyboardInput, VirtualKeyCode, WindowEvent};

use crate::pad::{Direction, PadEvent};

/// Collects keyboard input between frames, keeping the order keys arrived in.
#[derive(Debug, Default)]
pub struct InputHandler {
    pending: Vec<PadEvent>,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => {
                if let Some(pad_event) = map_key(*key, *state) {
                    self.pending.push(pad_event);
                }
            }
            WindowEvent::CloseRequested => self.pending.push(PadEvent::Quit),
            _ => {}
        }
    }

    /// Hands over everything recorded since the last call.
    pub fn drain(&mut self) -> std::vec::Drain<'_, PadEvent> {
        self.pending.drain(..)
    }
}

/// Translates a key transition into a pad event. Only the paint key reacts to
/// releases.
#[must_use]
pub const fn map_key(key: VirtualKeyCode, state: ElementState) -> Option<PadEvent> {
    use VirtualKeyCode as Key;

    if let ElementState::Released = state {
        return match key {
            Key::Space => Some(PadEvent::PaintUp),
            _ => None,
        };
    }
    let event = match key {
        Key::W => PadEvent::Move(Direction::Up),
        Key::A => PadEvent::Move(Direction::Left),
        Key::S => PadEvent::Move(Direction::Down),
        Key::D => PadEvent::Move(Direction::Right),
        Key::Q => PadEvent::Move(Direction::UpLeft),
        Key::E => PadEvent::Move(Direction::UpRight),
        Key::Z => PadEvent::Move(Direction::DownLeft),
        Key::C => PadEvent::Move(Direction::DownRight),
        Key::Space => PadEvent::PaintDown,
        Key::R => PadEvent::GrowBrush,
        Key::F => PadEvent::ShrinkBrush,
        Key::Key1 => PadEvent::SelectColor(0),
        Key::Key2 => PadEvent::SelectColor(1),
        Key::Key3 => PadEvent::SelectColor(2),
        Key::Key4 => PadEvent::SelectColor(3),
        Key::Key5 => PadEvent::SelectColor(4),
        Key::Key6 => PadEvent::SelectColor(5),
        Key::Key7 => PadEvent::SelectColor(6),
        Key::Key8 => PadEvent::SelectColor(7),
        Key::X => PadEvent::Clear,
        Key::Escape => PadEvent::Quit,
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_space_reacts_to_release() {
        assert_eq!(
            map_key(VirtualKeyCode::Space, ElementState::Released),
            Some(PadEvent::PaintUp)
        );
        assert_eq!(map_key(VirtualKeyCode::D, ElementState::Released), None);
        assert_eq!(map_key(VirtualKeyCode::Escape, ElementState::Released), None);
    }

    #[test]
    fn number_keys_select_palette() {
        assert_eq!(
            map_key(VirtualKeyCode::Key1, ElementState::Pressed),
            Some(PadEvent::SelectColor(0))
        );
        assert_eq!(
            map_key(VirtualKeyCode::Key8, ElementState::Pressed),
            Some(PadEvent::SelectColor(7))
        );
        assert_eq!(map_key(VirtualKeyCode::Key9, ElementState::Pressed), None);
    }

    #[test]
    fn diagonal_keys() {
        assert_eq!(
            map_key(VirtualKeyCode::Q, ElementState::Pressed),
            Some(PadEvent::Move(Direction::UpLeft))
        );
        assert_eq!(
            map_key(VirtualKeyCode::C, ElementState::Pressed),
            Some(PadEvent::Move(Direction::DownRight))
        );
    }

    #[test]
    fn close_request_quits() {
        let mut handler = InputHandler::new();
        handler.record(&WindowEvent::CloseRequested);
        assert_eq!(handler.drain().collect::<Vec<_>>(), vec![PadEvent::Quit]);
        assert_eq!(handler.drain().count(), 0);
    }
}
