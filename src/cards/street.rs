use crate::Error;

/// The four betting rounds in Texas Hold'em.
///
/// Each street is identified by how many community cards are showing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::Rive => "River",
        }
    }
    /// Community cards showing on this street.
    pub const fn n_board(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Community cards still to come.
    pub const fn n_pending(&self) -> usize {
        5 - self.n_board()
    }
}

/// board size isomorphism
impl TryFrom<usize> for Street {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            n => Err(Error::Street(n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_board_size() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.n_board()).unwrap(), street);
        }
    }

    #[test]
    fn partial_flops_are_not_streets() {
        assert!(matches!(Street::try_from(1), Err(Error::Street(1))));
        assert!(matches!(Street::try_from(2), Err(Error::Street(2))));
        assert!(matches!(Street::try_from(6), Err(Error::Street(6))));
    }
}
