//! Segment table
//!
//! Maps a displayable character to the segments that form its glyph.
//!
//! Segment layout:
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD  DP
//! ```

/// Number of segment lines per digit (7 strokes plus decimal point)
pub const SEGMENT_COUNT: usize = 8;

/// Every character with a non-blank glyph
pub const SUPPORTED_CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ.-#";

/// One segment line, in wiring order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    /// Top horizontal
    A,
    /// Top right vertical
    B,
    /// Bottom right vertical
    C,
    /// Bottom horizontal
    D,
    /// Bottom left vertical
    E,
    /// Top left vertical
    F,
    /// Middle horizontal
    G,
    /// Decimal point
    Dp,
}

impl Segment {
    /// All segments in wiring order (index 0..7)
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::Dp,
    ];

    /// Index of this segment's pin in the segment pin array
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Lit/unlit state of all eight segments of one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph([bool; SEGMENT_COUNT]);

impl Glyph {
    /// Nothing lit
    pub const BLANK: Glyph = Glyph([false; SEGMENT_COUNT]);

    /// Build a glyph from per-segment states in wiring order
    pub const fn from_segments(segments: [bool; SEGMENT_COUNT]) -> Self {
        Self(segments)
    }

    /// Build a glyph from a bit pattern, segment A in the MSB and DP in the LSB
    pub const fn from_bits(bits: u8) -> Self {
        let mut segments = [false; SEGMENT_COUNT];
        let mut i = 0;
        while i < SEGMENT_COUNT {
            segments[i] = bits & (0x80 >> i) != 0;
            i += 1;
        }
        Self(segments)
    }

    /// Per-segment states in wiring order
    pub const fn segments(&self) -> [bool; SEGMENT_COUNT] {
        self.0
    }

    /// Whether a given segment is lit
    pub const fn is_lit(&self, segment: Segment) -> bool {
        self.0[segment.index()]
    }

    /// True when no segment is lit
    pub fn is_blank(&self) -> bool {
        !self.0.iter().any(|&lit| lit)
    }
}

/// Look up the glyph for a character
///
/// Lookup is case-insensitive. Characters outside [`SUPPORTED_CHARS`]
/// (space included) render as [`Glyph::BLANK`]. Several letters are only
/// rough approximations; M, V, W and X in particular are not readable
/// on a 7-segment digit.
pub fn glyph(c: char) -> Glyph {
    let bits = match c.to_ascii_uppercase() {
        '0' => 0b1111_1100,
        '1' => 0b0110_0000,
        '2' => 0b1101_1010,
        '3' => 0b1111_0010,
        '4' => 0b0110_0110,
        '5' => 0b1011_0110,
        '6' => 0b1011_1110,
        '7' => 0b1110_0000,
        '8' => 0b1111_1110,
        '9' => 0b1111_0110,
        'A' => 0b1110_1110,
        'B' => 0b0011_1110,
        'C' => 0b1001_1100,
        'D' => 0b0111_1010,
        'E' => 0b1001_1110,
        'F' => 0b1000_1110,
        'G' => 0b1111_0110,
        'H' => 0b0010_1110,
        'I' => 0b0110_0000,
        'J' => 0b0111_1000,
        'K' => 0b1010_1110,
        'L' => 0b0001_1100,
        'M' => 0b1110_1101,
        'N' => 0b0010_1010,
        'O' => 0b0011_1010,
        'P' => 0b1100_1110,
        'Q' => 0b1110_0110,
        'R' => 0b0000_1010,
        'S' => 0b1011_0110,
        'T' => 0b1110_0000,
        'U' => 0b0011_1000,
        'V' => 0b0111_1101,
        'W' => 0b0111_1100,
        'X' => 0b0110_1111,
        'Y' => 0b0111_0110,
        'Z' => 0b1101_1011,
        '.' => 0b0000_0001,
        '-' => 0b0000_0010,
        '#' => 0b1111_1111,
        _ => 0,
    };
    Glyph::from_bits(bits)
}

/// Whether a character has a non-blank glyph
pub fn is_supported(c: char) -> bool {
    SUPPORTED_CHARS.contains(c.to_ascii_uppercase())
}
