use glint_markup::{parse, parse_with, MarkupConfig, MarkupError};
use glint_text::{Component, Context, NamedColor, Style, TextColor};
use proptest::prelude::*;

fn segments(input: &str) -> Vec<(String, Style)> {
    let compound = parse(input).unwrap();
    compound
        .children()
        .iter()
        .map(|child| (child.plain_text(&Context::new()), child.style().clone()))
        .collect()
}

#[test]
fn test_single_colored_segment() {
    assert_eq!(
        segments("&cHello"),
        vec![("Hello".to_string(), Style::new().with_color(NamedColor::Red))]
    );
}

#[test]
fn test_color_bold_then_reset() {
    assert_eq!(
        segments("&c&lHi &rBye"),
        vec![
            (
                "Hi ".to_string(),
                Style::new().with_color(NamedColor::Red).with_bold(true)
            ),
            ("Bye".to_string(), Style::new()),
        ]
    );
}

#[test]
fn test_escaped_control_is_literal() {
    assert_eq!(
        segments("plain \\&c text"),
        vec![("plain &c text".to_string(), Style::new())]
    );
}

#[test]
fn test_short_true_color_fails() {
    let err = parse("&#12345").unwrap_err();
    assert!(matches!(err, MarkupError::IncompleteTrueColor { .. }));
    assert_eq!(err.character(), '#');
}

#[test]
fn test_segments_are_literals() {
    let compound = parse("&aone&btwo&cthree").unwrap();
    assert!(compound
        .children()
        .iter()
        .all(|child| matches!(child, Component::Literal(_))));
    let colors: Vec<Option<TextColor>> = compound
        .children()
        .iter()
        .map(|child| child.style().color().cloned())
        .collect();
    assert_eq!(
        colors,
        vec![
            Some(NamedColor::Green.into()),
            Some(NamedColor::Aqua.into()),
            Some(NamedColor::Red.into()),
        ]
    );
}

#[test]
fn test_config_from_json() {
    let config: MarkupConfig = serde_json::from_str(r#"{ "control": "%", "escape": "!" }"#).unwrap();
    let compound = parse_with("%eGold? !%e", &config).unwrap();
    assert_eq!(compound.children().len(), 1);
    assert_eq!(
        compound.children()[0].plain_text(&Context::new()),
        "Gold? %e"
    );
}

fn escape_all(text: &str) -> String {
    text.chars().flat_map(|c| ['\\', c]).collect()
}

proptest! {
    #[test]
    fn prop_text_without_codes_is_one_unstyled_segment(text in "[^&\\\\]{1,40}") {
        let compound = parse(&text).unwrap();
        prop_assert_eq!(compound.children().len(), 1);
        prop_assert_eq!(compound.children()[0].plain_text(&Context::new()), text);
        prop_assert!(compound.children()[0].style().is_empty());
    }

    #[test]
    fn prop_fully_escaped_input_is_verbatim(text in ".{1,40}") {
        let compound = parse(&escape_all(&text)).unwrap();
        prop_assert_eq!(compound.children().len(), 1);
        prop_assert_eq!(compound.children()[0].plain_text(&Context::new()), text);
    }

    #[test]
    fn prop_segments_concatenate_to_unescaped_text(
        parts in prop::collection::vec(("[0-9a-f]", "[a-z ]{1,8}"), 1..6)
    ) {
        let markup: String = parts.iter().map(|(code, text)| format!("&{}{}", code, text)).collect();
        let expected: String = parts.iter().map(|(_, text)| text.as_str()).collect();
        let compound = parse(&markup).unwrap();
        let actual: String = compound
            .children()
            .iter()
            .map(|child| child.plain_text(&Context::new()))
            .collect();
        prop_assert_eq!(compound.children().len(), parts.len());
        prop_assert_eq!(actual, expected);
    }
}
