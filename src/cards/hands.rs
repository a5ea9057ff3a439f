use super::hand::Hand;

/// Combinatorial iterator over all n-card hands from a deck.
///
/// Generates all C(k, n) combinations of n cards from the k available cards
/// (those not blocked by the mask). Uses bit-twiddling to generate successive
/// permutations without storing them in memory.
///
/// # Construction
///
/// Created from `(n, mask)` where `n` is the hand size and `mask` is a [`Hand`]
/// of cards to exclude (already dealt cards).
///
/// # Performance
///
/// - Memory: O(1), only stores current state, not all combinations
/// - Time per `.next()`: O(1) amortized via Gosper's hack when the mask is sparse
/// - Deterministic ordering for reproducible iteration
///
/// A dense mask makes every step skip over blocked permutations. To choose
/// from a handful of cards, use [`Subsets`](super::subsets::Subsets).
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// Total number of remaining combinations.
    ///
    /// Computes C(available, hand_size) using the multiplicative formula.
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }
    /// Tests whether iteration is complete.
    fn exhausted(&self) -> bool {
        if self.next == 0 {
            true
        } else {
            (64 - 52) > self.next.leading_zeros()
        }
    }
    /// Gosper's hack for next bit permutation with same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
    fn look(&self) -> Hand {
        Hand::from(self.next)
    }
    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.exhausted() || self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let last = self.look();
            self.advance();
            Some(last)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted() {
            (0, Some(0))
        } else {
            (0, Some(self.combinations()))
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
        };
        while this.next & this.mask > 0 && !this.exhausted() {
            this.next = this.permute();
        }
        this
    }
}
