//! Turning one input line into something to run.

/// Where a line goes.
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'a> {
    /// Blank line.
    Skip,
    /// The exit keyword, in any case.
    Exit,
    /// Free-form arithmetic; carries the whole trimmed line.
    Expression(&'a str),
    /// A named command with its argument tokens.
    Command { name: String, args: Vec<&'a str> },
}

/// Route `line`, consulting `is_registered` for command names.
///
/// The first token is lowercased. `history <verb> ...` becomes
/// `history-<verb> ...` when that compound command exists. An unregistered
/// first token that is not purely alphabetic, on a line containing an
/// arithmetic operator, sends the whole line to the expression evaluator.
pub fn route<'a, F>(line: &'a str, is_registered: F) -> Route<'a>
where
    F: Fn(&str) -> bool,
{
    let line = line.trim();
    if line.is_empty() {
        return Route::Skip;
    }
    if line.eq_ignore_ascii_case("exit") {
        return Route::Exit;
    }

    let mut tokens = line.split_whitespace();
    let mut name = tokens.next().unwrap_or_default().to_lowercase();
    let mut args: Vec<&str> = tokens.collect();

    if name == "history" {
        if let Some(verb) = args.first() {
            let compound = format!("history-{}", verb.to_lowercase());
            if is_registered(&compound) {
                name = compound;
                args.remove(0);
            }
        }
    }

    if !is_registered(&name) && has_operator(line) && !is_alphabetic(&name) {
        return Route::Expression(line);
    }
    Route::Command { name, args }
}

fn has_operator(line: &str) -> bool {
    line.contains(['+', '-', '*', '/'])
}

fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Whether a result should be written to history: present and not an error.
///
/// The check is purely textual: anything starting with `Error` is skipped.
pub fn should_record(result: Option<&str>) -> bool {
    result.is_some_and(|text| !text.starts_with("Error"))
}
