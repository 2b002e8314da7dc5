use crate::{Config, Grid, Simulator, Step};
use anyhow::Result;
use log::info;
use std::io::{BufRead, Write};

const BANNER: &str = "===================================\n\
                      = \u{1F483}\u{1F57A}\u{1F483}\u{1F57A} Game Of Life \u{1F483}\u{1F57A}\u{1F483}\u{1F57A} =\n\
                      ===================================";
const PROMPT: &str = "Press Enter to continue to the next generation (type 'exit' to quit): ";
const STALEMATE: &str = "= Oops!! Stalemate reached! = \n= Exiting... =";
const GOODBYE: &str = "= Exiting... =";
const EXIT_COMMAND: &str = "exit";

/// How an interactive session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The user typed `exit`.
    UserQuit,
    /// Two consecutive generations were identical.
    Stalemate,
    /// The input stream ended before `exit` was typed.
    InputClosed,
}

/// Line-driven console front end: every line except `exit` advances one generation.
pub struct Shell<R, W> {
    simulator: Simulator,
    input: R,
    output: W,
    live_glyph: char,
    dead_glyph: char,
    generation: u64,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(simulator: Simulator, config: &Config, input: R, output: W) -> Self {
        Self {
            simulator,
            input,
            output,
            live_glyph: config.live_glyph,
            dead_glyph: config.dead_glyph,
            generation: 0,
        }
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Number of generations advanced so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the banner and the initial field, then advances once per input line
    /// until the user quits, the input ends or the field stabilizes.
    pub fn run(&mut self) -> Result<Outcome> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "Initial Grid:")?;
        self.print_grid()?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed after {} generations", self.generation);
                writeln!(self.output, "{GOODBYE}")?;
                return Ok(Outcome::InputClosed);
            }
            let command = line.trim_end_matches(&['\r', '\n'][..]);
            if command.eq_ignore_ascii_case(EXIT_COMMAND) {
                info!("user quit after {} generations", self.generation);
                writeln!(self.output, "{GOODBYE}")?;
                return Ok(Outcome::UserQuit);
            }

            match self.simulator.advance() {
                Step::Stabilized => {
                    info!("stalemate after {} generations", self.generation);
                    writeln!(self.output, "{STALEMATE}")?;
                    self.output.flush()?;
                    return Ok(Outcome::Stalemate);
                }
                Step::Advanced => {
                    self.generation += 1;
                    self.print_grid()?;
                }
            }
        }
    }

    fn print_grid(&mut self) -> Result<()> {
        let text = render(self.simulator.snapshot(), self.live_glyph, self.dead_glyph);
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Renders each cell as its glyph followed by a space, one row per line,
/// with a blank line after the last row.
pub fn render(grid: &Grid, live_glyph: char, dead_glyph: char) -> String {
    let mut result = String::with_capacity((grid.width() * 2 + 1) * grid.height() + 1);
    for row in grid.rows() {
        for cell in row {
            result.push(if cell.is_alive() { live_glyph } else { dead_glyph });
            result.push(' ');
        }
        result.push('\n');
    }
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(grid: &str, input: &str) -> (Outcome, String, u64) {
        let simulator = Simulator::from_grid(grid.parse().unwrap());
        let mut shell = Shell::new(simulator, &Config::default(), input.as_bytes(), vec![]);
        let outcome = shell.run().unwrap();
        let generation = shell.generation();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (outcome, output, generation)
    }

    #[test]
    fn test_render() {
        let grid: Grid = ".*\n*.".parse().unwrap();
        assert_eq!(render(&grid, '*', '.'), ". * \n* . \n\n");
        assert_eq!(render(&grid, '#', ' '), "  # \n#   \n\n");
    }

    #[test]
    fn test_exit_is_case_insensitive() {
        for command in ["exit", "EXIT", "Exit\r"] {
            let (outcome, output, generation) = run(".*.\n.*.\n.*.", &format!("{command}\n"));
            assert_eq!(outcome, Outcome::UserQuit);
            assert_eq!(generation, 0);
            assert!(output.ends_with(&format!("{PROMPT}{GOODBYE}\n")));
        }
    }

    #[test]
    fn test_exit_is_not_trimmed() {
        let (outcome, _, generation) = run(".*.\n.*.\n.*.", " exit\nexit\n");
        assert_eq!(outcome, Outcome::UserQuit);
        assert_eq!(generation, 1);
    }

    #[test]
    fn test_session_transcript() {
        let (outcome, output, generation) = run(".*.\n.*.\n.*.", "\nanything\nexit\n");
        assert_eq!(outcome, Outcome::UserQuit);
        assert_eq!(generation, 2);
        let vertical = ". * . \n. * . \n. * . \n\n";
        let horizontal = ". . . \n* * * \n. . . \n\n";
        let expected = format!(
            "{BANNER}\nInitial Grid:\n{vertical}{PROMPT}{horizontal}{PROMPT}{vertical}{PROMPT}{GOODBYE}\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_stalemate_stops_without_reprinting() {
        let (outcome, output, generation) = run("...\n...\n...", "\nexit\n");
        assert_eq!(outcome, Outcome::Stalemate);
        assert_eq!(generation, 0);
        assert!(output.ends_with(&format!(". . . \n\n{PROMPT}{STALEMATE}\n")));
    }

    #[test]
    fn test_stalemate_keeps_last_generation() {
        let block: Grid = "....\n.**.\n.**.\n....".parse().unwrap();
        let simulator = Simulator::from_grid(block.clone());
        let mut shell = Shell::new(simulator, &Config::default(), "\n".as_bytes(), Vec::<u8>::new());
        assert_eq!(shell.run().unwrap(), Outcome::Stalemate);
        assert_eq!(shell.simulator().snapshot(), &block);
        assert_eq!(shell.generation(), 0);
    }

    #[test]
    fn test_input_closed() {
        let (outcome, output, generation) = run(".*.\n.*.\n.*.", "\n");
        assert_eq!(outcome, Outcome::InputClosed);
        assert_eq!(generation, 1);
        assert!(output.ends_with(&format!("{PROMPT}{GOODBYE}\n")));
    }
}
