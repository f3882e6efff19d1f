//! Per-address instruction annotations.

use bitflags::bitflags;

const WIDTH_MASK: u32 = 0xffff;

/// Largest width an instruction may have; it must fit the width field.
pub const MAX_INSN_WIDTH: usize = WIDTH_MASK as usize;

bitflags! {
    /// Boolean annotations stored above the width field.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InsnFlag: u32 {
        /// Address lies inside at least one try range.
        const IN_TRY = 1 << 16;
        /// Address is the destination of a branch or exception handler.
        const BRANCH_TARGET = 1 << 17;
    }
}

/// One annotation word per code unit of a method.
///
/// The low 16 bits of each word hold the instruction width. A width of zero
/// marks an address that does not start an instruction. The array is owned by
/// whoever verifies the method and is threaded through the passes by mutable
/// reference; it holds nothing that outlives that method.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InsnFlags {
    words: Vec<u32>,
}

impl InsnFlags {
    /// Zeroed annotations for a method of `len` code units.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Clear every annotation.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }

    /// Width of the instruction starting at `addr`, zero if none does or if
    /// `addr` is out of range.
    #[inline]
    pub fn width(&self, addr: usize) -> usize {
        self.words.get(addr).map_or(0, |w| (w & WIDTH_MASK) as usize)
    }

    #[inline]
    pub fn set_width(&mut self, addr: usize, width: u16) {
        let word = &mut self.words[addr];
        *word = (*word & !WIDTH_MASK) | width as u32;
    }

    #[inline]
    pub fn is_insn_start(&self, addr: usize) -> bool {
        self.width(addr) != 0
    }

    /// Boolean annotations at `addr`; empty when out of range.
    #[inline]
    pub fn flags(&self, addr: usize) -> InsnFlag {
        self.words
            .get(addr)
            .map_or(InsnFlag::empty(), |&w| InsnFlag::from_bits_truncate(w))
    }

    #[inline]
    pub fn in_try(&self, addr: usize) -> bool {
        self.flags(addr).contains(InsnFlag::IN_TRY)
    }

    pub fn set_in_try(&mut self, addr: usize, value: bool) {
        self.set_flag(addr, InsnFlag::IN_TRY, value);
    }

    #[inline]
    pub fn is_branch_target(&self, addr: usize) -> bool {
        self.flags(addr).contains(InsnFlag::BRANCH_TARGET)
    }

    pub fn set_branch_target(&mut self, addr: usize, value: bool) {
        self.set_flag(addr, InsnFlag::BRANCH_TARGET, value);
    }

    fn set_flag(&mut self, addr: usize, flag: InsnFlag, value: bool) {
        let word = &mut self.words[addr];
        if value {
            *word |= flag.bits();
        } else {
            *word &= !flag.bits();
        }
    }

    /// `(address, width)` of every instruction start, in address order.
    pub fn insn_starts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(addr, w)| (addr, (w & WIDTH_MASK) as usize))
            .filter(|&(_, width)| width != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_flags_are_independent() {
        let mut f = InsnFlags::new(4);
        f.set_in_try(1, true);
        f.set_width(1, 3);
        f.set_branch_target(1, true);
        assert_eq!(f.width(1), 3);
        assert!(f.in_try(1));
        assert!(f.is_branch_target(1));

        f.set_width(1, 0xffff);
        assert_eq!(f.width(1), MAX_INSN_WIDTH);
        assert_eq!(f.flags(1), InsnFlag::IN_TRY | InsnFlag::BRANCH_TARGET);

        f.set_in_try(1, false);
        assert!(!f.in_try(1));
        assert!(f.is_branch_target(1));
    }

    #[test]
    fn out_of_range_reads_are_empty() {
        let f = InsnFlags::new(2);
        assert_eq!(f.width(2), 0);
        assert!(!f.is_insn_start(100));
        assert!(f.flags(7).is_empty());
    }

    #[test]
    fn insn_starts_skip_continuations() {
        let mut f = InsnFlags::new(5);
        f.set_width(0, 2);
        f.set_width(2, 3);
        f.set_in_try(3, true);
        assert_eq!(f.insn_starts().collect::<Vec<_>>(), vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut f = InsnFlags::new(3);
        f.set_width(0, 3);
        f.set_branch_target(0, true);
        f.reset();
        assert_eq!(f, InsnFlags::new(3));
    }
}
