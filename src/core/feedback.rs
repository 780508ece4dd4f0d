//! Guess feedback evaluation
//!
//! A `Feedback` row holds one tag per letter position:
//! - `Correct`: right letter, right position
//! - `Present`: letter occurs elsewhere in the target
//! - `Absent`: letter does not occur (or all its occurrences are spoken for)
//!
//! Evaluation uses the two-pass multiplicity rule, so a repeated letter in
//! the guess is never marked `Present` more times than it appears in the
//! target beyond exact matches.

use super::{WORD_LENGTH, Word};

/// Per-position feedback tag for a single guessed letter
///
/// Ordered by information value: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Absent,
    Present,
    Correct,
}

/// Ordered feedback for a full guess (one tag per position)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Tag; WORD_LENGTH]);

impl Feedback {
    /// All correct (winning guess)
    pub const WINNING: Self = Self([Tag::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and consume one
    ///    occurrence of that letter from the target's letter multiset.
    /// 2. Second pass: for each remaining position, mark `Present` while the
    ///    letter still has unconsumed occurrences, otherwise `Absent`.
    ///
    /// Pure function of (target, guess); no shared state.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::{Feedback, Tag, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("ranch").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    ///
    /// // R, A, N, C occur elsewhere in CRANE; H does not
    /// assert_eq!(
    ///     feedback.tags(),
    ///     &[Tag::Present, Tag::Present, Tag::Present, Tag::Present, Tag::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        let mut tags = [Tag::Absent; WORD_LENGTH];
        let mut remaining = target.letter_counts();

        // First pass: exact matches consume from the target multiset
        // Allow: index needed to compare guess[i] with target[i] and set tags[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == target.letter_at(i) {
                tags[i] = Tag::Correct;

                if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-elsewhere only while occurrences remain
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if tags[i] == Tag::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                tags[i] = Tag::Present;
                *count -= 1;
            }
        }

        Self(tags)
    }

    /// Get the ordered tag row
    #[inline]
    #[must_use]
    pub const fn tags(&self) -> &[Tag; WORD_LENGTH] {
        &self.0
    }

    /// Check whether every position is `Correct`
    ///
    /// Only evaluating a guess equal to the target produces a winning row.
    #[inline]
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.0.iter().all(|&tag| tag == Tag::Correct)
    }

    /// Count positions carrying a given tag
    #[must_use]
    pub fn count(&self, tag: Tag) -> usize {
        self.0.iter().filter(|&&t| t == tag).count()
    }

    /// Convert the row to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|tag| match tag {
                Tag::Correct => '🟩',
                Tag::Present => '🟨',
                Tag::Absent => '⬜',
            })
            .collect()
    }
}

impl IntoIterator for Feedback {
    type Item = Tag;
    type IntoIter = std::array::IntoIter<Tag, WORD_LENGTH>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Tag::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn all_absent() {
        let feedback = Feedback::evaluate(&word("fghij"), &word("abcde"));
        assert_eq!(feedback.tags(), &[Absent; 5]);
        assert!(!feedback.is_winning());
    }

    #[test]
    fn all_correct_only_for_exact_match() {
        let target = word("crane");
        assert!(Feedback::evaluate(&target, &word("crane")).is_winning());
        assert!(!Feedback::evaluate(&target, &word("crate")).is_winning());
        assert_eq!(Feedback::evaluate(&target, &word("crane")), Feedback::WINNING);
    }

    #[test]
    fn ranch_against_crane_is_four_present() {
        // R, A, N, C all occur elsewhere in CRANE; H is absent
        let feedback = Feedback::evaluate(&word("crane"), &word("ranch"));
        assert_eq!(
            feedback.tags(),
            &[Present, Present, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_guess_letter_not_double_counted() {
        // LEVEL has E at 1 and 3. ELBOW's first E matches neither position,
        // so one Present; the single L is Present; B, O, W absent.
        let feedback = Feedback::evaluate(&word("level"), &word("elbow"));
        assert_eq!(feedback.tags(), &[Present, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn duplicate_letters_yellow_cap() {
        // ERASE has two E's, SPEED guesses three letters against it:
        // S(present) P(absent) E(present) E(present) D(absent)
        let feedback = Feedback::evaluate(&word("erase"), &word("speed"));
        assert_eq!(
            feedback.tags(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // FLOOR vs ROBOT: first O is present, second O lands on the green slot
        let feedback = Feedback::evaluate(&word("floor"), &word("robot"));
        assert_eq!(
            feedback.tags(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn correct_consumes_before_present() {
        // Target ABBEY, guess BABES: the exact B and E are consumed first,
        // leaving one B and one A for the leading pair.
        let feedback = Feedback::evaluate(&word("abbey"), &word("babes"));
        assert_eq!(
            feedback.tags(),
            &[Present, Present, Correct, Correct, Absent]
        );
    }

    #[test]
    fn multiplicity_bound_holds() {
        // Correct + Present for any letter never exceeds its count in the target
        let targets = ["level", "erase", "abbey", "crane", "floor"];
        let guesses = ["elbow", "speed", "babes", "ranch", "lllll"];

        for t in targets {
            let target = word(t);
            let counts = target.letter_counts();
            for g in guesses {
                let guess = word(g);
                let feedback = Feedback::evaluate(&target, &guess);

                for letter in b'A'..=b'Z' {
                    let observed = feedback
                        .tags()
                        .iter()
                        .zip(guess.letters())
                        .filter(|&(&tag, &ch)| ch == letter && tag != Absent)
                        .count();
                    let available = usize::from(*counts.get(&letter).unwrap_or(&0));
                    assert!(
                        observed <= available,
                        "{t}/{g}: letter {} tagged {observed} times, target has {available}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn count_by_tag() {
        let feedback = Feedback::evaluate(&word("crane"), &word("ranch"));
        assert_eq!(feedback.count(Present), 4);
        assert_eq!(feedback.count(Absent), 1);
        assert_eq!(feedback.count(Correct), 0);
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(Feedback::WINNING.to_emoji(), "🟩🟩🟩🟩🟩");

        let feedback = Feedback::evaluate(&word("crane"), &word("ranch"));
        assert_eq!(feedback.to_emoji(), "🟨🟨🟨🟨⬜");
    }

    #[test]
    fn self_evaluation_is_winning_for_any_word() {
        for text in ["crane", "slate", "aaaaa", "zzzzz", "level"] {
            let w = word(text);
            assert_eq!(Feedback::evaluate(&w, &w), Feedback::WINNING);
        }
    }
}
