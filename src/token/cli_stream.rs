use log::warn;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::char_stream::CharStream;
use super::tokenizer::Tokenizer;
use crate::policy::SyntaxPolicy;


/// Interactive line source yielding one complete input at a time.
///
/// Lines are accumulated until every open paren is closed, so a single
/// expression can span several lines.
pub struct CliStream {
    editor: Editor<()>,

    curr_expr: String,
}

impl CliStream {
    pub fn new() -> CliStream {
        CliStream {
            editor: Editor::<()>::new(),
            curr_expr: String::default(),
        }
    }

    fn depth(&self) -> usize {
        let mut tokenizer = Tokenizer::new(
            CharStream::from(self.curr_expr.as_str()),
            SyntaxPolicy::Lenient,
        );
        for _token in &mut tokenizer {}
        tokenizer.depth()
    }
}

impl Default for CliStream {
    fn default() -> Self {
        Self::new()
    }
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let depth = self.depth();
            if depth == 0 {
                if !self.curr_expr.trim().is_empty() {
                    self.editor.add_history_entry(self.curr_expr.as_str());
                    return Some(std::mem::take(&mut self.curr_expr));
                }
                self.curr_expr.clear();
            }

            let prompt = if depth == 0 {
                "> ".to_string()
            } else {
                format!("..{}", "  ".repeat(depth))
            };

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if !self.curr_expr.is_empty() {
                        self.curr_expr.push('\n');
                    }
                    self.curr_expr += &line;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Enable ^C to cancel an expression mid-parse.
                    self.curr_expr.clear();
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    return None;
                }
                Err(err) => {
                    warn!("Readline failed: {:?}", err);
                    return None;
                }
            }
        }
    }
}
