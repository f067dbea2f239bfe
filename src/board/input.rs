//! Pointer input events.
//!
//! The input layer hit-tests the pointer against tiles and reports one of
//! these per discrete change. Events are serializable so recorded gestures
//! can be replayed in tests.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// A discrete pointer event over the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pressed over a tile.
    Down(Coord),
    /// Moved onto a tile (or a position past the edge) while pressed.
    Enter(Coord),
    /// Released, anywhere.
    Up,
}

impl PointerEvent {
    /// Shorthand for a full drag: down at `from`, enter `to`, up.
    #[must_use]
    pub fn drag(from: Coord, to: Coord) -> [PointerEvent; 3] {
        [PointerEvent::Down(from), PointerEvent::Enter(to), PointerEvent::Up]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag() {
        let events = PointerEvent::drag(Coord::new(0, 0), Coord::new(1, 1));
        assert_eq!(events[0], PointerEvent::Down(Coord::new(0, 0)));
        assert_eq!(events[1], PointerEvent::Enter(Coord::new(1, 1)));
        assert_eq!(events[2], PointerEvent::Up);
    }

    #[test]
    fn test_serialization() {
        let events = PointerEvent::drag(Coord::new(0, 0), Coord::new(4, 4));
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<PointerEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events.to_vec());
    }
}
