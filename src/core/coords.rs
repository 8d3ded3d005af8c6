//! Weltkoordinaten, Ausrichtung und Kachel-Umrechnung.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Kantenlänge einer Kachel in Welteinheiten.
///
/// Jede Umrechnung Weltkoordinate → Kachelkoordinate teilt durch diesen Wert.
pub const TILE_SIZE: i32 = 32;

/// Ausrichtung eines kachelbündigen Streckenstücks in Vierteldrehungen (0–3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Direction(u8);

impl Direction {
    /// Ausrichtung 0 (Identität der Rotationsmatrix)
    pub const D0: Direction = Direction(0);
    /// Ausrichtung 1
    pub const D1: Direction = Direction(1);
    /// Ausrichtung 2
    pub const D2: Direction = Direction(2);
    /// Ausrichtung 3
    pub const D3: Direction = Direction(3);

    /// Erstellt eine Ausrichtung; Werte über 3 werden modulo 4 normalisiert.
    pub const fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns & 3)
    }

    /// Rohwert 0–3.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Dreht um `quarter_turns` Vierteldrehungen weiter.
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        Self::new(self.0.wrapping_add(quarter_turns))
    }

    /// Entgegengesetzte Ausrichtung.
    pub const fn reversed(self) -> Self {
        self.rotated(2)
    }

    /// Rotiert einen relativen (x, y)-Offset in die absolute Ausrichtung.
    ///
    /// 0: (x, y) · 1: (y, −x) · 2: (−x, −y) · 3: (−y, x)
    pub fn rotate_offset(self, offset: IVec2) -> IVec2 {
        match self.0 {
            0 => offset,
            1 => IVec2::new(offset.y, -offset.x),
            2 => IVec2::new(-offset.x, -offset.y),
            _ => IVec2::new(-offset.y, offset.x),
        }
    }
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.0
    }
}

/// 2D-Weltposition (noch nicht durch die Kachelgröße geteilt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CoordsXY {
    pub x: i32,
    pub y: i32,
}

impl CoordsXY {
    /// Erstellt eine neue 2D-Weltposition.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Kachelkoordinate, auf der diese Weltposition liegt.
    pub fn to_tile(self) -> (i32, i32) {
        (self.x.div_euclid(TILE_SIZE), self.y.div_euclid(TILE_SIZE))
    }

    /// Position als Integer-Vektor.
    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Verschiebt die Position um einen Offset in Welteinheiten.
    pub fn offset(self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

/// 3D-Weltposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CoordsXYZ {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CoordsXYZ {
    /// Erstellt eine neue 3D-Weltposition.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Projektion auf die Kachelebene.
    pub const fn xy(self) -> CoordsXY {
        CoordsXY::new(self.x, self.y)
    }
}

/// 3D-Weltposition mit Ausrichtung (Lage eines Streckenstücks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CoordsXYZD {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub direction: Direction,
}

impl CoordsXYZD {
    /// Erstellt eine neue Lage.
    pub const fn new(x: i32, y: i32, z: i32, direction: Direction) -> Self {
        Self { x, y, z, direction }
    }

    /// Projektion auf die Kachelebene.
    pub const fn xy(self) -> CoordsXY {
        CoordsXY::new(self.x, self.y)
    }

    /// Position ohne Ausrichtung.
    pub const fn xyz(self) -> CoordsXYZ {
        CoordsXYZ::new(self.x, self.y, self.z)
    }

    /// Prüft ob x, y und z übereinstimmen (Ausrichtung wird ignoriert).
    pub fn same_position(self, other: CoordsXYZD) -> bool {
        self.xyz() == other.xyz()
    }
}

impl std::fmt::Display for CoordsXYZD {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}) dir {}",
            self.x,
            self.y,
            self.z,
            self.direction.value()
        )
    }
}
