use core::fmt;
use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

/// Stable identity of a card within one deck, `0..2 * pairs`.
pub type CardId = u16;

/// Count type used for pair counts and scores.
pub type PairCount = u8;

/// Reset counter carried by pending resolutions.
pub type Generation = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// 1-based number shown to the players.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::One
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player(Player),
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(player) => write!(f, "{} wins!", player),
            Self::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// Pairs found by each player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores([PairCount; 2]);

impl Scores {
    pub const fn new(one: PairCount, two: PairCount) -> Self {
        Self([one, two])
    }

    pub fn total(&self) -> u16 {
        self.0.iter().map(|&score| u16::from(score)).sum()
    }

    pub fn winner(&self) -> Winner {
        use core::cmp::Ordering::*;
        match self[Player::One].cmp(&self[Player::Two]) {
            Greater => Winner::Player(Player::One),
            Less => Winner::Player(Player::Two),
            Equal => Winner::Tie,
        }
    }
}

impl Index<Player> for Scores {
    type Output = PairCount;

    fn index(&self, player: Player) -> &Self::Output {
        &self.0[player.slot()]
    }
}

impl IndexMut<Player> for Scores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.0[player.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_toggles_between_both_players() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::One.other().other(), Player::One);
    }

    #[test]
    fn winner_compares_scores() {
        assert_eq!(Scores::new(3, 1).winner(), Winner::Player(Player::One));
        assert_eq!(Scores::new(0, 2).winner(), Winner::Player(Player::Two));
        assert_eq!(Scores::new(4, 4).winner(), Winner::Tie);
        assert_eq!(Scores::default().winner(), Winner::Tie);
    }

    #[test]
    fn scores_are_indexed_by_player() {
        let mut scores = Scores::default();
        scores[Player::Two] += 2;

        assert_eq!(scores[Player::One], 0);
        assert_eq!(scores[Player::Two], 2);
        assert_eq!(scores.total(), 2);
    }
}
