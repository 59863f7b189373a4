use std::io::{self, BufRead, Write};

use log::debug;
use rand::Rng;

use crate::Quiz;
use crate::models::{Question, Selection};
use crate::ui;

/// Reward for a single confident correct guess; hedged guesses split it.
pub const POINTS_PER_QUESTION: u32 = 12;

/// Drives one interactive run of a quiz.
///
/// Generic over its input, output and randomness so the whole loop can be
/// exercised in tests with scripted lines, a byte buffer and a seeded RNG.
pub struct QuizRunner<R, W, G> {
    input: R,
    output: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> QuizRunner<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self { input, output, rng }
    }

    /// Runs the quiz to completion and returns the final score.
    ///
    /// Returns an error on EOF or any other I/O failure; invalid answer
    /// input is re-prompted, never fatal.
    pub fn run(mut self, quiz: &mut Quiz) -> io::Result<u32> {
        ui::welcome::render(&mut self.output)?;
        self.read_line()?; // acknowledgment, any line will do

        let mut score = 0;
        for question in quiz.questions_mut() {
            question.shuffle_and_label(&mut self.rng);
            ui::quiz::render_question(&mut self.output, question)?;

            let selection = self.read_selection()?;
            let points = points_awarded(question, &selection);
            debug!("selection {:?} earned {} points", selection, points);

            score += points;
            if let Some(correct) = question.correct_letter() {
                ui::result::render_verdict(&mut self.output, correct, points, score)?;
            }
        }

        let max = quiz.questions().len() as u32 * POINTS_PER_QUESTION;
        ui::result::render_final(&mut self.output, score, max)?;

        Ok(score)
    }

    fn read_selection(&mut self) -> io::Result<Selection> {
        loop {
            ui::quiz::render_answer_prompt(&mut self.output)?;
            match Selection::parse(&self.read_line()?) {
                Ok(selection) => return Ok(selection),
                Err(reason) => ui::quiz::render_invalid(&mut self.output, reason)?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the quiz finished",
            ));
        }
        Ok(line)
    }
}

/// 12 points split evenly across the guessed letters, or nothing if the
/// correct letter is not among them.
fn points_awarded(question: &Question, selection: &Selection) -> u32 {
    match question.correct_letter() {
        Some(correct) if selection.contains(correct) => {
            POINTS_PER_QUESTION / selection.count() as u32
        }
        _ => 0,
    }
}
