use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::models::{Letter, Question};

pub fn render_question(out: &mut impl Write, question: &Question) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", "Question:".bold(), question.description())?;

    for (answer, letter) in question.answers().iter().zip(Letter::ALL) {
        writeln!(
            out,
            "  {}. {}",
            letter.to_string().cyan(),
            answer.description()
        )?;
    }

    Ok(())
}

pub fn render_answer_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{} ", "Answer:".bold())?;
    out.flush()
}

pub fn render_invalid(out: &mut impl Write, reason: &str) -> io::Result<()> {
    writeln!(out, "{}", reason.red())
}
