use std::str::FromStr;

use crate::error::ArtError;

/// How a cell brightness that falls between two palette levels is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// Closest level; the lower one wins a tie.
    #[default]
    Nearest,
    Down,
    Up,
}

impl RoundingPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nearest => "abs",
            Self::Down => "down",
            Self::Up => "up",
        }
    }

    /// Picks a char from `levels`, which must be sorted by brightness with
    /// unique keys. Falls back to the other side when the preferred neighbour
    /// does not exist.
    pub fn pick(self, brightness: f64, levels: &[(f64, char)]) -> Option<char> {
        let floor = floor_level(brightness, levels);
        let ceiling = ceiling_level(brightness, levels);
        let chosen = match self {
            Self::Down => floor.or(ceiling),
            Self::Up => ceiling.or(floor),
            Self::Nearest => match (floor, ceiling) {
                (Some(lo), Some(hi)) => {
                    if (brightness - lo.0).abs() <= (hi.0 - brightness).abs() {
                        Some(lo)
                    } else {
                        Some(hi)
                    }
                }
                (lo, hi) => lo.or(hi),
            },
        };
        chosen.map(|&(_, c)| c)
    }
}

impl FromStr for RoundingPolicy {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abs" => Ok(Self::Nearest),
            "down" => Ok(Self::Down),
            "up" => Ok(Self::Up),
            _ => Err(ArtError::RoundingFormat),
        }
    }
}

fn floor_level(brightness: f64, levels: &[(f64, char)]) -> Option<&(f64, char)> {
    let idx = levels.partition_point(|&(key, _)| key <= brightness);
    idx.checked_sub(1).map(|i| &levels[i])
}

fn ceiling_level(brightness: f64, levels: &[(f64, char)]) -> Option<&(f64, char)> {
    let idx = levels.partition_point(|&(key, _)| key < brightness);
    levels.get(idx)
}
