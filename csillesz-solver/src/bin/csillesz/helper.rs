//! Tab completion for command names, city names and DST rules.

use csillesz_solver::commands::COMMAND_NAMES;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

pub struct ShellHelper {
    commands: Vec<String>,
    cities: Vec<String>,
}

impl ShellHelper {
    pub fn new<'a>(cities: impl Iterator<Item = &'a str>) -> Self {
        Self {
            commands: COMMAND_NAMES.iter().map(|s| s.to_string()).collect(),
            cities: cities.map(str::to_string).collect(),
        }
    }

    /// Candidates for word number `index` (0 is the command) of `cmd`.
    fn candidates(&self, cmd: &str, index: usize) -> Vec<String> {
        match (cmd, index) {
            (_, 0) => self.commands.clone(),
            ("CITYDIST", 1 | 2) | ("CITYLST", 1) => self.cities.clone(),
            ("HELP", 1) => self.commands.clone(),
            ("DST", 1) => vec!["european".into(), "none".into()],
            _ => Vec::new(),
        }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let up_to = &line[..pos];
        let words: Vec<&str> = up_to.split_whitespace().collect();
        let start = up_to.rfind(char::is_whitespace).map_or(0, |i| i + 1);

        let (index, prefix) = if up_to.is_empty() || up_to.ends_with(char::is_whitespace) {
            (words.len(), "")
        } else {
            (words.len() - 1, words.last().copied().unwrap_or(""))
        };
        let cmd = words.first().map_or(String::new(), |s| s.to_uppercase());

        let prefix = prefix.to_lowercase();
        let matches = self
            .candidates(&cmd, index)
            .into_iter()
            .filter(|c| c.to_lowercase().starts_with(&prefix))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}
impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}
