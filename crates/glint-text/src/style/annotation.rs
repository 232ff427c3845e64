//! Annotations: non-visual values carried by a style.
//!
//! Annotations ride along with the cascade like any other style attribute.
//! Interactive events (click and hover) are modelled directly; anything else
//! travels as [`Annotation::Custom`] and is interpreted only by the adapters
//! that know its key.

use serde::{Deserialize, Serialize};

use crate::component::Component;

/// What happens when the annotated text is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    OpenUrl,
    RunCommand,
    SuggestCommand,
    CopyToClipboard,
    ChangePage,
}

impl ClickAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
            ClickAction::ChangePage => "change_page",
        }
    }
}

/// A click event attached to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }

    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::SuggestCommand, command)
    }
}

/// What a hover tooltip displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverAction {
    ShowText,
    ShowAchievement,
    ShowItem,
    ShowEntity,
}

impl HoverAction {
    pub fn as_str(self) -> &'static str {
        match self {
            HoverAction::ShowText => "show_text",
            HoverAction::ShowAchievement => "show_achievement",
            HoverAction::ShowItem => "show_item",
            HoverAction::ShowEntity => "show_entity",
        }
    }
}

/// A hover event whose value is itself a component tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEvent {
    pub action: HoverAction,
    pub value: Box<Component>,
}

impl HoverEvent {
    pub fn new(action: HoverAction, value: impl Into<Component>) -> Self {
        Self {
            action,
            value: Box::new(value.into()),
        }
    }

    /// Shorthand for a `show_text` tooltip.
    pub fn show_text(value: impl Into<Component>) -> Self {
        Self::new(HoverAction::ShowText, value)
    }
}

/// A value attached to a [`Style`](super::Style) besides its formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Click(ClickEvent),
    Hover(HoverEvent),
    /// An adapter-specific value identified by `key`.
    Custom {
        key: String,
        value: serde_json::Value,
    },
}

impl Annotation {
    /// Creates a custom annotation.
    pub fn custom(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Annotation::Custom {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the click event, if this is one.
    pub fn as_click(&self) -> Option<&ClickEvent> {
        match self {
            Annotation::Click(event) => Some(event),
            _ => None,
        }
    }

    /// Returns the hover event, if this is one.
    pub fn as_hover(&self) -> Option<&HoverEvent> {
        match self {
            Annotation::Hover(event) => Some(event),
            _ => None,
        }
    }
}

impl From<ClickEvent> for Annotation {
    fn from(event: ClickEvent) -> Self {
        Annotation::Click(event)
    }
}

impl From<HoverEvent> for Annotation {
    fn from(event: HoverEvent) -> Self {
        Annotation::Hover(event)
    }
}
