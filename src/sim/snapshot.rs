//! Read-only view of the game for the presentation layer

use serde::Serialize;

use super::difficulty::Difficulty;
use super::state::GamePhase;

/// Brick color tier, picked from the hits a brick still needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrickTier {
    One,
    Two,
    Three,
}

impl BrickTier {
    pub fn from_remaining(remaining_hits: u8) -> Self {
        match remaining_hits {
            0 | 1 => BrickTier::One,
            2 => BrickTier::Two,
            _ => BrickTier::Three,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BrickTier::One => "#0095DD",
            BrickTier::Two => "#DD9500",
            BrickTier::Three => "#DD0000",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrickView {
    pub column: usize,
    pub row: usize,
    pub rect: RectView,
    pub strength: u8,
    pub remaining_hits: u8,
    pub tier: BrickTier,
    pub color: &'static str,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub round: u32,
    pub difficulty: Option<Difficulty>,
    pub score: u32,
    /// Arena theme class name
    pub theme: &'static str,
    pub ball: BallView,
    pub paddle: RectView,
    /// Active bricks only, column-major
    pub bricks: Vec<BrickView>,
    /// Set once the delayed end-of-round message is due
    pub end_message: Option<String>,
}

impl Snapshot {
    /// HUD score line
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(BrickTier::from_remaining(1), BrickTier::One);
        assert_eq!(BrickTier::from_remaining(2), BrickTier::Two);
        assert_eq!(BrickTier::from_remaining(3), BrickTier::Three);
        assert_eq!(BrickTier::from_remaining(7), BrickTier::Three);
        assert_eq!(BrickTier::Two.color(), "#DD9500");
    }
}
