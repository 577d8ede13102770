pub mod dna;

use bit_set::BitSet;
use std::borrow::Borrow;

/// A set of accepted byte symbols.
#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    /// Position of the first byte of `text` outside the alphabet.
    pub fn first_foreign<C, T>(&self, text: T) -> Option<(usize, u8)>
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter()
            .map(|c| *c.borrow())
            .enumerate()
            .find(|&(_, b)| !self.contains(b))
    }
}
