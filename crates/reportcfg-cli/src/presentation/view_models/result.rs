use serde::Serialize;
use std::fmt;

use super::common::{Guidance, StatusBadge};

/// Text rendering options decided by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStyle {
    pub color: bool,
}

/// View models that know their text layout.
pub trait CreateView {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a>;
}

/// Envelope every command renders: the content plus an optional status
/// badge and follow-up tips. JSON output is this struct as-is.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    pub fn is_error(&self) -> bool {
        self.badge
            .as_ref()
            .is_some_and(|badge| badge.level == super::StatusLevel::Error)
    }
}
