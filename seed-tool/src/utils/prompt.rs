use std::io::{self, BufRead, Write};

/// Asks the operator before touching the backend.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Interactive confirmation on the terminal.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        ask(question, &mut stdin.lock(), &mut stdout.lock())
    }
}

/// Used with `--yes` or when running under CI.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(true)
    }
}

/// Prints `question` with a `[Y/n]` hint and reads one line. An empty answer
/// or `y`/`Y` means yes. A closed input means no.
pub fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{} [Y/n] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }

    let answer = answer.trim_end_matches(['\n', '\r']);
    Ok(answer.is_empty() || answer.eq_ignore_ascii_case("y"))
}
