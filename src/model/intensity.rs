/// Saffir-Simpson style intensity class of a fix, used for track markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntensityCategory {
    Depression,
    Storm,
    Category1,
    Category2,
    Category3,
    Category4,
    Category5,
}

impl IntensityCategory {
    /// Classifies a maximum sustained wind speed in knots.
    #[must_use]
    pub fn from_wind_kt(wind_kt: u32) -> Self {
        match wind_kt {
            0..=33 => Self::Depression,
            34..=63 => Self::Storm,
            64..=82 => Self::Category1,
            83..=95 => Self::Category2,
            96..=112 => Self::Category3,
            113..=136 => Self::Category4,
            _ => Self::Category5,
        }
    }

    /// One-character marker drawn at the fix.
    #[must_use]
    pub fn label(self) -> char {
        match self {
            Self::Depression => 'D',
            Self::Storm => 'S',
            Self::Category1 => '1',
            Self::Category2 => '2',
            Self::Category3 => '3',
            Self::Category4 => '4',
            Self::Category5 => '5',
        }
    }
}
