//! Branch selection from poll results.

/// One of the two options offered by a poll post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Choice {
    /// The first poll option
    #[display("1")]
    First,
    /// The second poll option
    #[display("2")]
    Second,
}

impl Choice {
    /// Select a branch from the observed vote counts.
    ///
    /// Option 1 wins only on a strictly greater count; ties and any
    /// non-greater count resolve to option 2. The asymmetry is a deliberate
    /// contract of the traversal, not an accident of comparison order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_core::Choice;
    ///
    /// assert_eq!(Choice::from_votes(2, 1), Choice::First);
    /// assert_eq!(Choice::from_votes(1, 2), Choice::Second);
    /// assert_eq!(Choice::from_votes(1, 1), Choice::Second);
    /// ```
    pub fn from_votes(option_1: u64, option_2: u64) -> Self {
        if option_1 > option_2 {
            Choice::First
        } else {
            Choice::Second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_resolve_to_option_two() {
        assert_eq!(Choice::from_votes(0, 0), Choice::Second);
        assert_eq!(Choice::from_votes(5, 5), Choice::Second);
    }

    #[test]
    fn strict_majority_wins() {
        assert_eq!(Choice::from_votes(3, 2), Choice::First);
        assert_eq!(Choice::from_votes(2, 3), Choice::Second);
    }
}
