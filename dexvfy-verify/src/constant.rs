/// Narrowest register category able to hold a 32-bit literal.
///
/// Ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstCategory {
    Zero,
    One,
    /// 2..=127
    PosByte,
    /// -128..=-1
    Byte,
    /// 128..=32767
    PosShort,
    /// -32768..=-129
    Short,
    /// 32768..=65535
    Char,
    Integer,
}

/// Classify a literal loaded by a `const` instruction.
pub fn classify_const(value: i32) -> ConstCategory {
    match value {
        i32::MIN..=-32769 => ConstCategory::Integer,
        -32768..=-129 => ConstCategory::Short,
        -128..=-1 => ConstCategory::Byte,
        0 => ConstCategory::Zero,
        1 => ConstCategory::One,
        2..=127 => ConstCategory::PosByte,
        128..=32767 => ConstCategory::PosShort,
        32768..=65535 => ConstCategory::Char,
        65536.. => ConstCategory::Integer,
    }
}
