use crate::Error;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// The ordering (C < D < H < S) is arbitrary but consistent. It fixes the
/// byte encoding of a [`Card`](super::card::Card) and nothing else; suits
/// never break ties between hands.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    pub const fn symbol(&self) -> char {
        match self {
            Suit::C => 'c',
            Suit::D => 'd',
            Suit::H => 'h',
            Suit::S => 's',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 representation
/// every card of this suit in a 52-bit Hand mask
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::C => 0x0001111111111111,
            Suit::D => 0x0002222222222222,
            Suit::H => 0x0004444444444444,
            Suit::S => 0x0008888888888888,
        }
    }
}

/// char isomorphism. lowercase only
impl TryFrom<char> for Suit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Suit::all()
            .into_iter()
            .find(|s| s.symbol() == c)
            .ok_or_else(|| Error::Parse(c.to_string()))
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::D;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Suit::C) == 0b0001000100010001000100010001000100010001000100010001);
        assert!(u64::from(Suit::D) == 0b0010001000100010001000100010001000100010001000100010);
        assert!(u64::from(Suit::H) == 0b0100010001000100010001000100010001000100010001000100);
        assert!(u64::from(Suit::S) == 0b1000100010001000100010001000100010001000100010001000);
    }

    #[test]
    fn uppercase_rejected() {
        assert!(Suit::try_from('S').is_err());
        assert!(Suit::try_from('s').is_ok());
    }
}
