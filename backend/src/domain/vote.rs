//! Vote direction parsed from the `vote` query parameter.

/// Requested vote.
///
/// Only `up` and `down` carry an amount. Anything else is kept as
/// [`Vote::Unrecognised`] and forwarded to the store, which rejects the
/// non-numeric increment.
///
/// # Examples
/// ```
/// use newsdesk::domain::Vote;
///
/// assert_eq!(Vote::from_query(Some("up")).delta(), Some(1));
/// assert_eq!(Vote::from_query(Some("down")).delta(), Some(-1));
/// assert_eq!(Vote::from_query(Some("sideways")).delta(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    /// Add one.
    Up,
    /// Subtract one.
    Down,
    /// Missing or unknown value.
    Unrecognised,
}

impl Vote {
    /// Map the raw query value. Matching is exact.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("up") => Self::Up,
            Some("down") => Self::Down,
            _ => Self::Unrecognised,
        }
    }

    /// Increment amount, if any.
    #[must_use]
    pub const fn delta(self) -> Option<i64> {
        match self {
            Self::Up => Some(1),
            Self::Down => Some(-1),
            Self::Unrecognised => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("UP"))]
    #[case(Some("upvote"))]
    fn anything_else_is_unrecognised(#[case] raw: Option<&str>) {
        assert_eq!(Vote::from_query(raw), Vote::Unrecognised);
    }
}
