//! # quiz-cli
//!
//! A terminal multiple-choice quiz with hedged answers.
//!
//! Questions come from a JSON file; every question has one correct and
//! three wrong options, shuffled and lettered A-D anew on each
//! presentation. The player answers with one or more letters ("B", or
//! "A/C" when torn between two), and the 12-point reward for a correct
//! guess is split across the guessed letters.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_cli::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load and validate the questions
//!     let quiz = Quiz::from_json("question.json")?;
//!
//!     // Play the quiz on stdin/stdout
//!     let score = quiz.play()?;
//!     println!("final score: {}", score);
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
mod ui;

use std::io;
use std::path::Path;

pub use app::{POINTS_PER_QUESTION, QuizRunner};
pub use data::{BuildError, LoadError, RawRecords, build_quiz, load_records};
pub use models::{Answer, Letter, Question, Selection};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error reading or parsing the question file.
    Load(LoadError),
    /// Error validating the question records.
    Build(BuildError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Build(e) => write!(f, "Invalid question file: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Build(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<BuildError> for QuizError {
    fn from(err: BuildError) -> Self {
        QuizError::Build(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// An ordered set of validated questions ready to be played.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    /// Creates a quiz from already-validated questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Loads and validates a quiz from a JSON file.
    ///
    /// Questions are presented in the sorted order of their record keys;
    /// see [`build_quiz`] for the validation rules.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_cli::Quiz;
    ///
    /// let quiz = Quiz::from_json("question.json").expect("failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let records = load_records(path)?;
        Ok(build_quiz(&records)?)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub(crate) fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    /// Plays the quiz interactively on stdin/stdout and returns the final
    /// score.
    pub fn play(mut self) -> Result<u32, QuizError> {
        let runner = QuizRunner::new(io::stdin().lock(), io::stdout().lock(), rand::thread_rng());
        Ok(runner.run(&mut self)?)
    }
}
