use std::io::{self, Write};

use crossterm::style::Stylize;

pub fn render(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to the quiz!".bold())?;
    writeln!(out)?;
    writeln!(out, "  1. Every question has exactly one correct answer.")?;
    writeln!(out, "  2. Pick every option you think might be right.")?;
    writeln!(out)?;
    writeln!(
        out,
        "Answer with the letters A/B/C/D, several letters separated by a slash."
    )?;
    writeln!(
        out,
        "Sure the answer is B? Type \"{}\". Torn between A and C? Type \"{}\".",
        "B".cyan(),
        "A/C".cyan()
    )?;
    writeln!(
        out,
        "Order does not matter: A/C and C/A count as the same answer."
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "A confident single guess earns {} points; hedged guesses split them.",
        "12".bold()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", "Press ENTER when you are ready!".green().bold())?;

    Ok(())
}
