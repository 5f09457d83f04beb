//! Reply command parser.
//!
//! Parses reply lines such as `@bot update_name shuffle` or
//! `@bot update_name rand 6 kanji` into a typed [`NameCommand`].

/// Command word that addresses this feature. Matched case-insensitively.
pub const COMMAND_WORD: &str = "update_name";

/// A parsed `update_name` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCommand {
    /// Raw action word, e.g. `shuffle` or a literal new name.
    pub action: String,
    /// Remaining whitespace-separated arguments, in order.
    pub options: Vec<String>,
}

/// Parse a reply line into a [`NameCommand`].
///
/// Leading `@mention` tokens are skipped. Returns `None` if the next token is
/// not the command word or if no action follows it.
pub fn parse_command(input: &str) -> Option<NameCommand> {
    let mut tokens = input
        .split_whitespace()
        .skip_while(|t| t.starts_with('@') || t.starts_with(".@"));

    let cmd = tokens.next()?;
    if !cmd.eq_ignore_ascii_case(COMMAND_WORD) {
        return None;
    }

    let action = tokens.next()?.to_string();
    let options = tokens.map(str::to_string).collect();
    Some(NameCommand { action, options })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_mentions() {
        let cmd = parse_command("@bot @other update_name shuffle").unwrap();
        assert_eq!(cmd.action, "shuffle");
        assert!(cmd.options.is_empty());
    }

    #[test]
    fn test_parse_options() {
        let cmd = parse_command(".@bot UPDATE_NAME rand 6  kanji").unwrap();
        assert_eq!(cmd.action, "rand");
        assert_eq!(cmd.options, vec!["6", "kanji"]);
    }

    #[test]
    fn test_parse_literal_name() {
        let cmd = parse_command("update_name 😀😀😀").unwrap();
        assert_eq!(cmd.action, "😀😀😀");
    }

    #[test]
    fn test_rejects_other_commands() {
        assert!(parse_command("@bot hello there").is_none());
        assert!(parse_command("@bot update_names shuffle").is_none());
        assert!(parse_command("").is_none());
        assert!(parse_command("@bot").is_none());
    }

    #[test]
    fn test_requires_action() {
        assert!(parse_command("@bot update_name").is_none());
        assert!(parse_command("@bot update_name   ").is_none());
    }
}
