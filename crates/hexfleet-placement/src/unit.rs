//! Naval unit types and their hull lengths.

/// A kind of ship. Each occupies a straight run of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NavalUnit {
    Patrol,
    Submarine,
    Destroyer,
    Battleship,
    Carrier,
}

impl NavalUnit {
    pub const ALL: [Self; 5] = [
        Self::Patrol,
        Self::Submarine,
        Self::Destroyer,
        Self::Battleship,
        Self::Carrier,
    ];

    /// Number of tiles the ship covers.
    pub const fn length(self) -> usize {
        match self {
            Self::Patrol => 1,
            Self::Submarine | Self::Destroyer => 2,
            Self::Battleship => 3,
            Self::Carrier => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Patrol => "patrol",
            Self::Submarine => "submarine",
            Self::Destroyer => "destroyer",
            Self::Battleship => "battleship",
            Self::Carrier => "carrier",
        }
    }
}

impl std::fmt::Display for NavalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for NavalUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| format!("unknown naval unit: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull_lengths() {
        let lengths: Vec<_> = NavalUnit::ALL.iter().map(|u| u.length()).collect();
        assert_eq!(lengths, [1, 2, 2, 3, 4]);
    }

    #[test]
    fn parse_names() {
        for unit in NavalUnit::ALL {
            assert_eq!(unit.to_string().parse::<NavalUnit>(), Ok(unit));
        }
        assert!("dinghy".parse::<NavalUnit>().is_err());
    }
}
