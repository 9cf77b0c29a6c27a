use crate::models::Comment;
use crate::query::{self, Command};
use crate::table;
use anyhow::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Please, write your command!";
pub const WRONG_COMMAND: &str = "wrong command";

/// Drive the interactive command loop over the scanned collection.
///
/// Each input line is resolved, applied and rendered in full before the
/// next line is read. Syntax errors print the fixed `wrong command`
/// message and the loop continues; `exit` or end-of-input ends the
/// session cleanly.
pub fn run<R: BufRead, W: Write>(comments: &[Comment], input: R, output: &mut W) -> Result<()> {
    writeln!(output, "{PROMPT}")?;

    for line in input.lines() {
        let line = line?;
        match query::parse_command(&line) {
            Ok(Command::Exit) => break,
            Ok(command) => {
                let selection = query::apply(&command, comments);
                write!(output, "{}", table::render(&selection))?;
            }
            Err(_) => writeln!(output, "{WRONG_COMMAND}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn comment(user: &str, date: &str, text: &str) -> Comment {
        Comment {
            user: user.to_string(),
            date: date.to_string(),
            text: text.to_string(),
            importance: text.matches('!').count(),
            file_name: "test.js".to_string(),
        }
    }

    fn run_lines(comments: &[Comment], input: &str) -> String {
        let mut output = Vec::new();
        run(comments, Cursor::new(input.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prompt_comes_first() {
        let output = run_lines(&[], "exit\n");
        assert!(output.starts_with(PROMPT));
    }

    #[test]
    fn test_show_renders_a_table() {
        let comments = vec![comment("bob", "2012", "fix it!")];
        let output = run_lines(&comments, "show\nexit\n");
        assert!(output.contains("fix it!"));
        assert!(output.contains("fileName"));
    }

    #[test]
    fn test_wrong_command_keeps_the_session_alive() {
        let comments = vec![comment("bob", "2012", "fix it!")];
        let output = run_lines(&comments, "nonsense\nuser \nshow\nexit\n");
        assert_eq!(output.matches(WRONG_COMMAND).count(), 2);
        // The later show still works
        assert!(output.contains("fix it!"));
    }

    #[test]
    fn test_exit_stops_processing() {
        let comments = vec![comment("bob", "2012", "fix it!")];
        let output = run_lines(&comments, "exit\nshow\n");
        assert!(!output.contains("fix it!"));
    }

    #[test]
    fn test_end_of_input_is_an_implicit_exit() {
        let output = run_lines(&[], "show\n");
        assert!(output.contains("comment"));
    }

    #[test]
    fn test_important_filter_through_the_loop() {
        let comments = vec![comment("a", "", "calm"), comment("b", "", "loud!")];
        let output = run_lines(&comments, "important\nexit\n");
        assert!(output.contains("loud!"));
        assert!(!output.contains("calm"));
    }
}
