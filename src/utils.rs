/// Terminal spinner shown while long git operations run
pub mod spinner;

/// Render an argument list the way it would be typed at a shell prompt.
///
/// Arguments containing whitespace or quotes are single-quoted so the echoed
/// line can be pasted back into a shell.
pub fn display_command<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&quote_arg(arg.as_ref()));
    }
    line
}

fn quote_arg(arg: &str) -> String {
    if !arg.is_empty()
        && !arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\' | '$' | '`'))
    {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}
