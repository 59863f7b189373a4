use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Answer, Letter};

/// A single quiz question: a prompt and its four answer options.
#[derive(Debug, Clone)]
pub struct Question {
    description: String,
    answers: [Answer; 4],
}

impl Question {
    pub fn new(description: impl Into<String>, answers: [Answer; 4]) -> Self {
        Self {
            description: description.into(),
            answers,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn answers(&self) -> &[Answer; 4] {
        &self.answers
    }

    /// Shuffles the answers and assigns A-D to the new positions.
    ///
    /// Called once per presentation; a replayed question gets a fresh
    /// shuffle and fresh letters.
    pub fn shuffle_and_label(&mut self, rng: &mut impl Rng) {
        self.answers.shuffle(rng);
        for (answer, letter) in self.answers.iter_mut().zip(Letter::ALL) {
            answer.set_letter(letter);
        }
    }

    /// The letter currently assigned to the correct answer.
    ///
    /// `None` until the question has been presented at least once.
    pub fn correct_letter(&self) -> Option<Letter> {
        self.answers
            .iter()
            .find(|answer| answer.is_correct())
            .and_then(Answer::letter)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn sample_question() -> Question {
        Question::new(
            "2+2=?",
            [
                Answer::correct("4"),
                Answer::wrong("3"),
                Answer::wrong("5"),
                Answer::wrong("22"),
            ],
        )
    }

    #[test]
    fn test_shuffle_assigns_each_letter_once() {
        let mut question = sample_question();
        question.shuffle_and_label(&mut StdRng::seed_from_u64(1));

        let letters: BTreeSet<_> = question
            .answers()
            .iter()
            .map(|answer| answer.letter().unwrap())
            .collect();
        assert_eq!(letters.len(), 4);
    }

    #[test]
    fn test_shuffle_keeps_descriptions_and_correctness() {
        let mut question = sample_question();
        let mut rng = StdRng::seed_from_u64(2);
        let expected: BTreeSet<&str> = ["4", "3", "5", "22"].into();

        for _ in 0..10 {
            question.shuffle_and_label(&mut rng);

            let descriptions: BTreeSet<&str> = question
                .answers()
                .iter()
                .map(|answer| answer.description())
                .collect();
            assert_eq!(descriptions, expected);

            let correct = question
                .answers()
                .iter()
                .filter(|answer| answer.is_correct())
                .count();
            assert_eq!(correct, 1);
        }
    }

    #[test]
    fn test_correct_letter_follows_the_shuffle() {
        let mut question = sample_question();
        assert_eq!(question.correct_letter(), None); // not presented yet

        question.shuffle_and_label(&mut StdRng::seed_from_u64(3));

        let correct = question.correct_letter().unwrap();
        let at_letter = question
            .answers()
            .iter()
            .find(|answer| answer.letter() == Some(correct))
            .unwrap();
        assert!(at_letter.is_correct());
    }

    #[test]
    fn test_same_seed_gives_the_same_shuffle() {
        let order = |seed: u64| -> Vec<String> {
            let mut question = sample_question();
            question.shuffle_and_label(&mut StdRng::seed_from_u64(seed));
            question
                .answers()
                .iter()
                .map(|answer| answer.description().to_owned())
                .collect()
        };

        assert_eq!(order(7), order(7));
    }
}
