//! The ordinal password quality scale shared by all checks.

/// Password quality verdict on a fixed six-level ordinal scale.
///
/// Every check returns one of these values, and the aggregated result of
/// [`QualityCheck::check_quality`](crate::QualityCheck::check_quality) is
/// always inside the same range. The ordinal value (0–5) doubles as the
/// numeric weight in the aggregation arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Quality {
    /// Not a usable password: a hard constraint (empty, too short, too long)
    /// was violated and no graded quality applies.
    None = 0,
    /// Very bad quality, or the password is a known word list entry.
    VeryBad = 1,
    /// Does not meet modern standards; flagging it to the user is obligatory.
    Bad = 2,
    /// Medium quality; a more secure password would not hurt.
    Medium = 3,
    /// Good quality with minor flaws.
    Good = 4,
    /// The best quality.
    High = 5,
}

impl Quality {
    /// All known quality values, in ascending order.
    pub const KNOWN: [Quality; 6] = [
        Quality::None,
        Quality::VeryBad,
        Quality::Bad,
        Quality::Medium,
        Quality::Good,
        Quality::High,
    ];

    /// Ordinal value of this quality (0–5), used as the numeric weight
    /// when averaging check results.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Maps a raw score back onto the scale, clamping to the valid range.
    ///
    /// The aggregator funnels every truncated average through this, so its
    /// output can never leave 0..=5 even if an intermediate sum overshoots.
    pub const fn from_value(value: i64) -> Quality {
        match value {
            i64::MIN..=0 => Quality::None,
            1 => Quality::VeryBad,
            2 => Quality::Bad,
            3 => Quality::Medium,
            4 => Quality::Good,
            _ => Quality::High,
        }
    }
}
