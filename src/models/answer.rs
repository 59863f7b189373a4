use std::fmt;
use std::str::FromStr;

/// Display letter identifying an answer's position in one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    /// The four option labels in presentation order.
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
        };
        f.write_str(label)
    }
}

impl FromStr for Letter {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "A" | "a" => Ok(Letter::A),
            "B" | "b" => Ok(Letter::B),
            "C" | "c" => Ok(Letter::C),
            "D" | "d" => Ok(Letter::D),
            _ => Err(()),
        }
    }
}

/// A single answer option. Exactly one answer per question is `Correct`.
///
/// The letter is not part of construction; it is assigned anew every time
/// the question is presented, after shuffling.
#[derive(Debug, Clone)]
pub enum Answer {
    Correct {
        description: String,
        letter: Option<Letter>,
    },
    Wrong {
        description: String,
        letter: Option<Letter>,
    },
}

impl Answer {
    pub fn correct(description: impl Into<String>) -> Self {
        Answer::Correct {
            description: description.into(),
            letter: None,
        }
    }

    pub fn wrong(description: impl Into<String>) -> Self {
        Answer::Wrong {
            description: description.into(),
            letter: None,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Answer::Correct { .. })
    }

    pub fn description(&self) -> &str {
        match self {
            Answer::Correct { description, .. } | Answer::Wrong { description, .. } => description,
        }
    }

    /// The letter assigned at the most recent presentation, if any.
    pub fn letter(&self) -> Option<Letter> {
        match self {
            Answer::Correct { letter, .. } | Answer::Wrong { letter, .. } => *letter,
        }
    }

    pub(crate) fn set_letter(&mut self, assigned: Letter) {
        match self {
            Answer::Correct { letter, .. } | Answer::Wrong { letter, .. } => {
                *letter = Some(assigned)
            }
        }
    }
}
