//! Closing-delimiter search
//!
//! Every delimited rule asks the same question: "where is the first closing
//! delimiter at or after this index?". Asked naively at every cursor
//! position, a long run of unterminated openers turns the scan quadratic.
//!
//! [`CloserIndex`] remembers the last answer per delimiter. An answer
//! "first closer at `c`, searching from `from`" stays valid for any later
//! query starting in `from..=c`, and "no closer after `from`" stays valid
//! for every later query. The cursor only moves forward, so each delimiter's
//! searches cover disjoint stretches of the text and the total work is
//! linear. Answers are identical to a fresh first-occurrence search.

/// Closing delimiters the scanner searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Closer {
    /// `**`
    DoubleStar,
    /// `__`
    DoubleUnderscore,
    /// `~~`
    DoubleTilde,
    /// A `*` that is not one leg of a `**`
    Star,
    /// A `_` that is not one leg of a `__`
    Underscore,
}

impl Closer {
    const COUNT: usize = 5;

    fn slot(self) -> usize {
        match self {
            Closer::DoubleStar => 0,
            Closer::DoubleUnderscore => 1,
            Closer::DoubleTilde => 2,
            Closer::Star => 3,
            Closer::Underscore => 4,
        }
    }

    fn byte(self) -> u8 {
        match self {
            Closer::DoubleStar | Closer::Star => b'*',
            Closer::DoubleUnderscore | Closer::Underscore => b'_',
            Closer::DoubleTilde => b'~',
        }
    }

    fn is_double(self) -> bool {
        matches!(
            self,
            Closer::DoubleStar | Closer::DoubleUnderscore | Closer::DoubleTilde
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Answer {
    from: usize,
    found: Option<usize>,
}

impl Answer {
    fn covers(&self, from: usize) -> Option<Option<usize>> {
        if from < self.from {
            return None;
        }
        match self.found {
            None => Some(None),
            Some(close) if from <= close => Some(Some(close)),
            Some(_) => None,
        }
    }
}

/// Per-scan memo of closing-delimiter positions.
#[derive(Debug)]
pub struct CloserIndex<'a> {
    bytes: &'a [u8],
    answers: [Option<Answer>; Closer::COUNT],
    steps: usize,
}

impl<'a> CloserIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            answers: [None; Closer::COUNT],
            steps: 0,
        }
    }

    /// First index `>= from` where `closer` occurs.
    pub fn find(&mut self, closer: Closer, from: usize) -> Option<usize> {
        if let Some(hit) = self.answers[closer.slot()].and_then(|a| a.covers(from)) {
            return hit;
        }
        let found = self.search(closer, from);
        self.answers[closer.slot()] = Some(Answer { from, found });
        found
    }

    /// Bytes examined by uncached searches so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn search(&mut self, closer: Closer, from: usize) -> Option<usize> {
        let d = closer.byte();
        let bytes = self.bytes;
        let mut i = from;
        while i < bytes.len() {
            self.steps += 1;
            if bytes[i] == d && self.is_closer_at(closer, i) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    fn is_closer_at(&self, closer: Closer, i: usize) -> bool {
        let d = closer.byte();
        let next = self.bytes.get(i + 1).copied();
        if closer.is_double() {
            return next == Some(d);
        }
        let prev = if i == 0 { None } else { Some(self.bytes[i - 1]) };
        next != Some(d) && prev != Some(d)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_finds_first_occurrence() {
        let mut index = CloserIndex::new("a**b**c");
        assert_eq!(index.find(Closer::DoubleStar, 0), Some(1));
        assert_eq!(index.find(Closer::DoubleStar, 3), Some(4));
        assert_eq!(index.find(Closer::DoubleStar, 6), None);
    }

    #[test]
    fn test_double_allows_overlap_like_substring_search() {
        // "***" contains "**" at 0 and at 1
        let mut index = CloserIndex::new("***");
        assert_eq!(index.find(Closer::DoubleStar, 1), Some(1));
    }

    #[test]
    fn test_single_skips_doubled_legs() {
        let mut index = CloserIndex::new("_a__b_");
        assert_eq!(index.find(Closer::Underscore, 1), Some(5));
    }

    #[test]
    fn test_single_rejects_trailing_leg() {
        // the '*' at 2 is preceded by '*'
        let mut index = CloserIndex::new("a**");
        assert_eq!(index.find(Closer::Star, 1), None);
    }

    #[test]
    fn test_tilde_and_star_are_independent() {
        let mut index = CloserIndex::new("~~x~~ *y*");
        assert_eq!(index.find(Closer::DoubleTilde, 2), Some(3));
        assert_eq!(index.find(Closer::Star, 7), Some(8));
        assert_eq!(index.find(Closer::DoubleStar, 0), None);
    }

    #[test]
    fn test_memo_matches_fresh_search() {
        let text = "**a** __b__ **c **d*e*";
        let mut memo = CloserIndex::new(text);
        for closer in [
            Closer::DoubleStar,
            Closer::DoubleUnderscore,
            Closer::Star,
            Closer::Underscore,
        ] {
            for from in 0..=text.len() {
                let mut fresh = CloserIndex::new(text);
                assert_eq!(
                    memo.find(closer, from),
                    fresh.find(closer, from),
                    "{:?} from {}",
                    closer,
                    from
                );
            }
        }
    }

    #[test]
    fn test_repeated_misses_are_cached() {
        let text = format!("*{}", "a".repeat(1000));
        let mut index = CloserIndex::new(&text);
        for from in 1..text.len() {
            assert_eq!(index.find(Closer::Star, from), None);
        }
        assert!(index.steps() <= text.len());
    }
}
