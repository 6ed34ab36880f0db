//! Command script parsing.
//!
//! One command per line. Blank lines and `#` comments are skipped.

use anyhow::{anyhow, bail, Context, Result};

/// A key press written as `ctrl+shift+z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub key: egui::Key,
    pub modifiers: egui::Modifiers,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(String),
    Preview(String),
    Undo,
    Redo,
    Reset(String),
    Restore(usize),
    Clear,
    Key(Chord),
    Show,
}

/// Parses a whole script.
///
/// # Errors
///
/// Fails on the first bad line, naming its 1-based line number.
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (i, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(line).with_context(|| format!("line {}", i + 1))? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parses one line. Returns `None` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "set" => Command::Set(text_arg(word, arg)?),
        "preview" => Command::Preview(text_arg(word, arg)?),
        "reset" => Command::Reset(text_arg(word, arg)?),
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "clear" => Command::Clear,
        "show" => Command::Show,
        "restore" => {
            let index = text_arg(word, arg)?;
            let index = index
                .parse()
                .with_context(|| format!("invalid history index {index:?}"))?;
            Command::Restore(index)
        }
        "key" => Command::Key(parse_chord(&text_arg(word, arg)?)?),
        other => bail!("unknown command {other:?}"),
    };
    Ok(Some(command))
}

fn text_arg(word: &str, arg: &str) -> Result<String> {
    if arg.is_empty() {
        bail!("{word} needs an argument");
    }
    Ok(arg.to_string())
}

/// Parses a chord such as `ctrl+z`, `cmd+shift+z`, or `meta+y`.
pub fn parse_chord(text: &str) -> Result<Chord> {
    let mut modifiers = egui::Modifiers::NONE;
    let mut key = None;
    for part in text.split('+').map(str::trim) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers = modifiers | egui::Modifiers::CTRL,
            "cmd" | "command" => modifiers = modifiers | egui::Modifiers::COMMAND,
            "meta" | "super" => modifiers = modifiers | egui::Modifiers::MAC_CMD,
            "shift" => modifiers = modifiers | egui::Modifiers::SHIFT,
            "alt" | "option" => modifiers = modifiers | egui::Modifiers::ALT,
            _ if key.is_some() => bail!("chord {text:?} has more than one key"),
            name => {
                let parsed = egui::Key::from_name(&name.to_ascii_uppercase())
                    .ok_or_else(|| anyhow!("unknown key {part:?} in chord {text:?}"))?;
                key = Some(parsed);
            }
        }
    }
    let key = key.ok_or_else(|| anyhow!("chord {text:?} has no key"))?;
    Ok(Chord { key, modifiers })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_commands_keep_inner_spaces() {
        assert_eq!(
            parse_line("set  hello world ").unwrap(),
            Some(Command::Set("hello world".to_string()))
        );
        assert_eq!(
            parse_line("preview x").unwrap(),
            Some(Command::Preview("x".to_string()))
        );
        assert_eq!(
            parse_line("reset fresh").unwrap(),
            Some(Command::Reset("fresh".to_string()))
        );
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_line("undo").unwrap(), Some(Command::Undo));
        assert_eq!(parse_line("  redo  ").unwrap(), Some(Command::Redo));
        assert_eq!(parse_line("clear").unwrap(), Some(Command::Clear));
        assert_eq!(parse_line("show").unwrap(), Some(Command::Show));
        assert_eq!(parse_line("restore 3").unwrap(), Some(Command::Restore(3)));
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# set 1").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("set").is_err());
        assert!(parse_line("restore two").is_err());
        assert!(parse_line("jump 1").is_err());
        assert!(parse_line("key").is_err());
    }

    #[test]
    fn test_script_error_names_line() {
        let err = parse_script("set a\n\nbogus\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3");
        assert!(format!("{err:#}").contains("unknown command \"bogus\""));
    }

    #[test]
    fn test_parse_script_collects_commands() {
        let commands = parse_script("# demo\nset a\nundo\n\nredo\n").unwrap();
        assert_eq!(
            commands,
            vec![Command::Set("a".to_string()), Command::Undo, Command::Redo]
        );
    }

    #[test]
    fn test_parse_chords() {
        let chord = parse_chord("ctrl+z").unwrap();
        assert_eq!(chord.key, egui::Key::Z);
        assert!(chord.modifiers.ctrl);
        assert!(!chord.modifiers.shift);

        let chord = parse_chord("Cmd + Shift + Z").unwrap();
        assert_eq!(chord.key, egui::Key::Z);
        assert!(chord.modifiers.command);
        assert!(chord.modifiers.shift);

        let chord = parse_chord("meta+y").unwrap();
        assert_eq!(chord.key, egui::Key::Y);
        assert!(chord.modifiers.mac_cmd);
    }

    #[test]
    fn test_bad_chords() {
        assert!(parse_chord("ctrl+shift").is_err());
        assert!(parse_chord("ctrl+z+y").is_err());
        assert!(parse_chord("ctrl+nosuchkey").is_err());
    }
}
