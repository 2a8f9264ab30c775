use super::*;
use colored::Colorize;

/// Terminal rendering of a management command.
/// Keywords light blue, type annotations yellow, delimiters light red.
/// Column names are left alone even when they contain a type name.
pub fn highlight(query: &CreateTable) -> String {
    query
        .render()
        .split_inclusive('\n')
        .map(line)
        .collect()
}

fn line(text: &str) -> String {
    let (body, newline) = match text.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (text, ""),
    };
    if let Some(rest) = body.strip_prefix(CREATE_TABLE) {
        let rest = rest.trim_end_matches('(').trim();
        return format!(
            "{} {} {} {}{}",
            ".create".bright_blue(),
            "table".bright_blue(),
            rest,
            "(".bright_red(),
            newline
        );
    }
    if body == ")" {
        return format!("{}{}", ")".bright_red(), newline);
    }
    match body.split_once(": ") {
        Some((name, kind)) => {
            let (kind, comma) = match kind.strip_suffix(',') {
                Some(kind) => (kind, ","),
                None => (kind, ""),
            };
            format!("{}: {}{}{}", name, kind.yellow(), comma, newline)
        }
        None => text.to_string(),
    }
}
