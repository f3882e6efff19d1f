use std::fmt;

/// Dalvik instruction formats.
///
/// The name of each format encodes its layout: the first digit is the size in
/// code units, the second the number of registers, and the letter the kind of
/// extra data (`x` none, `n` nibble literal, `b`/`s`/`i`/`l`/`h` literals,
/// `t` branch target, `c` constant pool index, `rc` register range).
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// `op`
    F10x,
    /// `op vA, vB`
    F12x,
    /// `op vA, #+B`
    F11n,
    /// `op vAA`
    F11x,
    /// `op +AA`
    F10t,
    /// `op +AAAA`
    F20t,
    /// `op vAA, vBBBB`
    F22x,
    /// `op vAA, +BBBB`
    F21t,
    /// `op vAA, #+BBBB`
    F21s,
    /// `op vAA, #+BBBB0000[00000000]`
    F21h,
    /// `op vAA, kind@BBBB`
    F21c,
    /// `op vAA, vBB, vCC`
    F23x,
    /// `op vAA, vBB, #+CC`
    F22b,
    /// `op vA, vB, +CCCC`
    F22t,
    /// `op vA, vB, #+CCCC`
    F22s,
    /// `op vA, vB, kind@CCCC`
    F22c,
    /// `op vAAAA, vBBBB`
    F32x,
    /// `op +AAAAAAAA`
    F30t,
    /// `op vAA, +BBBBBBBB`
    F31t,
    /// `op vAA, #+BBBBBBBB`
    F31i,
    /// `op vAA, kind@BBBBBBBB`
    F31c,
    /// `op {vC, vD, vE, vF, vG}, kind@BBBB`
    F35c,
    /// `op {vCCCC .. vNNNN}, kind@BBBB`
    F3rc,
    /// `op vAA, #+BBBBBBBBBBBBBBBB`
    F51l,
}

impl Format {
    /// Size of an instruction in this format, in 16-bit code units.
    pub const fn size(self) -> usize {
        match self {
            Format::F10x | Format::F12x | Format::F11n | Format::F11x | Format::F10t => 1,
            Format::F20t
            | Format::F22x
            | Format::F21t
            | Format::F21s
            | Format::F21h
            | Format::F21c
            | Format::F23x
            | Format::F22b
            | Format::F22t
            | Format::F22s
            | Format::F22c => 2,
            Format::F32x
            | Format::F30t
            | Format::F31t
            | Format::F31i
            | Format::F31c
            | Format::F35c
            | Format::F3rc => 3,
            Format::F51l => 5,
        }
    }

    /// Whether the format carries a relative branch offset.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Format::F10t | Format::F20t | Format::F30t | Format::F21t | Format::F22t
        )
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("{self:?}");
        f.write_str(&name[1..])
    }
}
