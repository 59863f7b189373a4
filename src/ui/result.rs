use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::models::Letter;

pub fn render_verdict(
    out: &mut impl Write,
    correct: Letter,
    points: u32,
    running_total: u32,
) -> io::Result<()> {
    if points > 0 {
        writeln!(
            out,
            "{}",
            format!("Yes! {} is correct, +{} points.", correct, points).green()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            "No luck... that was not the right answer.".red()
        )?;
    }
    writeln!(out, "Your score so far: {}", running_total.to_string().bold())?;

    Ok(())
}

pub fn render_final(out: &mut impl Write, score: u32, max: u32) -> io::Result<()> {
    let percentage = if max > 0 {
        score as f64 / max as f64 * 100.0
    } else {
        0.0
    };

    writeln!(out)?;
    writeln!(
        out,
        "The quiz is over! Final score: {}",
        format!("{} / {}  ({:.0}%)", score, max, percentage)
            .with(grade_color(percentage))
            .bold()
    )?;

    Ok(())
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
