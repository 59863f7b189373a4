use std::path::PathBuf;
use std::process;

use clap::Parser;
use quiz_cli::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = "question.json")]
    questions: PathBuf,
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    let quiz = match Quiz::from_json(&args.questions) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = quiz.play() {
        eprintln!("Error running quiz: {}", e);
        process::exit(1);
    }
}
