use std::{
    io,
    io::{stdin, stdout, BufRead, Write},
};

use crate::lexer::{token::TokenKind, Lexer};

pub const PROMPT: &str = ">> ";

/// Reads lines until end of input, echoing each line's tokens. Lexing is
/// total, so malformed input prints `Illegal` tokens instead of failing.
pub fn start() -> io::Result<()> {
    let mut buffer = String::new();

    let stdin = stdin();

    let mut stdout = stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;

        stdout.flush()?;

        if stdin.lock().read_line(&mut buffer)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(&buffer);

        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            writeln!(stdout, "{:?}", token)?;
        }

        buffer.clear();
    }
}
