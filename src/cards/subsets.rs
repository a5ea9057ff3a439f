use super::hand::Hand;

/// Lexicographic k-subsets of the cards in a small Hand.
///
/// Where [`HandIterator`](super::hands::HandIterator) walks the whole deck,
/// this walks index combinations `i_0 < i_1 < .. < i_k` over the n cards
/// actually present, so choosing 5 of 7 takes exactly 21 steps.
pub struct Subsets {
    cards: Vec<u64>,
    index: Vec<usize>,
    done: bool,
}

impl Subsets {
    /// bump the rightmost index that still has room, reset everything after it
    fn advance(&mut self) {
        let n = self.cards.len();
        let k = self.index.len();
        match (0..k).rev().find(|&i| self.index[i] < n - k + i) {
            None => self.done = true,
            Some(i) => {
                self.index[i] += 1;
                for j in i + 1..k {
                    self.index[j] = self.index[j - 1] + 1;
                }
            }
        }
    }
    fn look(&self) -> Hand {
        Hand::from(
            self.index
                .iter()
                .map(|&i| self.cards[i])
                .fold(0u64, |a, b| a | b),
        )
    }
}

impl Iterator for Subsets {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            let last = self.look();
            self.advance();
            Some(last)
        }
    }
}

impl From<(usize, Hand)> for Subsets {
    fn from((k, hand): (usize, Hand)) -> Self {
        let cards = hand.map(u64::from).collect::<Vec<u64>>();
        Self {
            done: k > cards.len() || k == 0,
            index: (0..k).collect(),
            cards,
        }
    }
}
