#![allow(clippy::module_inception)]

use std::{fs, io, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Extension expected on source files passed to the command line.
pub const SOURCE_EXTENSION: &str = "mlsp";

/// A 1-based source line together with the name of the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn line(&self) -> usize {
        self.0
    }

    pub fn file(&self) -> &str {
        &self.1
    }
}

/// Source text ready to be tokenized.
#[derive(Debug, Clone)]
pub struct Source {
    pub code: String,
    pub name: String,
    /// Set when the code was read from a file lacking the `.mlsp` extension.
    pub unexpected_extension: bool,
}

/// Treats `input` as a path if such a file exists, otherwise as literal code.
///
/// Files are read as bytes; invalid UTF-8 is replaced rather than rejected.
/// Line endings are kept as written, so `\r` survives, and the returned code
/// always ends in a newline when it came from a non-empty file.
pub fn read_into_string_if_file_exists(input: &str) -> io::Result<Source> {
    let path = Path::new(input);

    if !path.is_file() {
        return Ok(Source {
            code: input.to_string(),
            name: String::from("shell"),
            unexpected_extension: false,
        });
    }

    let bytes = fs::read(path)?;
    let mut code = String::from_utf8_lossy(&bytes).into_owned();
    if !code.is_empty() && !code.ends_with('\n') {
        code.push('\n');
    }

    let unexpected_extension =
        path.extension().and_then(|extension| extension.to_str()) != Some(SOURCE_EXTENSION);

    Ok(Source {
        code,
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.to_string()),
        unexpected_extension,
    })
}

/// Returns the text of the 1-based `line` in `source`, without its newline.
pub fn get_line_text(source: &str, line: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line.checked_sub(1)?)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnterminatedScope (Did you forget a `)`?)
        -> shell
           |
         2 | (define x
           |
    */

    let position = error.get_position();
    let line_string = position.line().to_string();
    let padding = line_string.len() + 2;

    let mut rendered = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    rendered.push_str(&format!("{}\n", error));
    rendered.push_str(&format!("-> {}\n", position.file()));

    if let Some(line_text) = get_line_text(source, position.line()) {
        rendered.push_str(&format!("{:>padding$}\n", "|"));
        rendered.push_str(&format!(
            "{} | {}\n",
            line_string,
            remove_starting_whitespace(line_text).trim_end()
        ));
        rendered.push_str(&format!("{:>padding$}\n", "|"));
    }

    rendered
}

fn remove_starting_whitespace(string: &str) -> &str {
    string.trim_start_matches([' ', '\t'])
}
