use picker_core::{Catalog, CategoryFilter};
use thiserror::Error;

use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Toggle(String),
    EnableAll,
    DisableAll,
    Tab(CategoryFilter),
    Pick,
    Repick,
    DisableCurrent,
    Close,
    Refresh,
    Lang(Locale),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Err(ParseError::Empty),
        "list" | "ls" => Command::List,
        "toggle" | "t" => Command::Toggle(required(arg, "toggle")?.to_string()),
        "enable-all" => Command::EnableAll,
        "disable-all" => Command::DisableAll,
        "tab" => {
            let arg = required(arg, "tab")?;
            CategoryFilter::parse(arg)
                .map(Command::Tab)
                .ok_or_else(|| ParseError::Unknown(line.to_string()))?
        }
        "pick" | "p" => Command::Pick,
        "repick" | "r" => Command::Repick,
        "disable" => Command::DisableCurrent,
        "close" | "c" => Command::Close,
        "refresh" => Command::Refresh,
        "lang" => {
            let arg = required(arg, "lang")?;
            Locale::parse(arg)
                .map(Command::Lang)
                .ok_or_else(|| ParseError::Unknown(line.to_string()))?
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(ParseError::Unknown(line.to_string())),
    };
    Ok(command)
}

/// Finds an agent id by exact id or case-insensitive display name.
pub fn resolve_agent(catalog: &Catalog, query: &str) -> Option<String> {
    let query = query.trim();
    catalog
        .items()
        .iter()
        .find(|item| item.id == query || item.display_name.eq_ignore_ascii_case(query))
        .map(|item| item.id.clone())
}

fn required<'a>(arg: &'a str, command: &'static str) -> Result<&'a str, ParseError> {
    if arg.is_empty() {
        Err(ParseError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::{CatalogItem, Category, Details, Media};

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse("pick"), Ok(Command::Pick));
        assert_eq!(parse("  REPICK "), Ok(Command::Repick));
        assert_eq!(parse("enable-all"), Ok(Command::EnableAll));
        assert_eq!(parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn toggle_keeps_multi_word_names() {
        assert_eq!(parse("toggle KAY/O"), Ok(Command::Toggle("KAY/O".into())));
        assert_eq!(
            parse("t  Some Agent "),
            Ok(Command::Toggle("Some Agent".into()))
        );
        assert_eq!(parse("toggle"), Err(ParseError::MissingArgument("toggle")));
    }

    #[test]
    fn tab_and_lang_validate_arguments() {
        assert_eq!(
            parse("tab sentinel"),
            Ok(Command::Tab(CategoryFilter::Only(Category::Sentinel)))
        );
        assert_eq!(parse("tab all"), Ok(Command::Tab(CategoryFilter::All)));
        assert!(matches!(parse("tab healer"), Err(ParseError::Unknown(_))));
        assert_eq!(parse("lang fr"), Ok(Command::Lang(Locale::Fr)));
        assert!(matches!(parse("lang de"), Err(ParseError::Unknown(_))));
    }

    #[test]
    fn empty_and_unknown_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("dance"), Err(ParseError::Unknown("dance".into())));
    }

    #[test]
    fn resolves_by_id_or_name() {
        let item = CatalogItem {
            id: "601dbbe7".to_string(),
            display_name: "KAY/O".to_string(),
            category: Category::Initiator,
            media: Media {
                icon: "https://media.example.com/kayo.png".to_string(),
                portrait: "https://media.example.com/kayo.png".to_string(),
            },
            details: Details::default(),
        };
        let catalog = Catalog::from_items(vec![item]).unwrap();
        assert_eq!(resolve_agent(&catalog, "kay/o"), Some("601dbbe7".into()));
        assert_eq!(resolve_agent(&catalog, "601dbbe7"), Some("601dbbe7".into()));
        assert_eq!(resolve_agent(&catalog, "jett"), None);
    }
}
