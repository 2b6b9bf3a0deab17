use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::result::{CreateView, ViewStyle};
use crate::presentation::views::report::{
    CatalogView, CheckView, LabelView, OptionsView, UpdateView,
};

#[derive(Debug, Serialize)]
pub struct OptionViewModel {
    pub key: String,
    pub label: String,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CatalogDimensionViewModel {
    pub dimension: String,
    pub options: Vec<OptionViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CatalogViewModel {
    pub subject: String,
    pub dimensions: Vec<CatalogDimensionViewModel>,
}

#[derive(Debug, Serialize)]
pub struct OptionsViewModel {
    pub subject: String,
    pub dimension: String,
    pub options: Vec<OptionViewModel>,
}

/// One stage of a compatibility check; `passed` is `None` when unset.
#[derive(Debug, Serialize)]
pub struct StageViewModel {
    pub dimension: String,
    pub value: Option<Value>,
    pub label: Option<String>,
    pub passed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CheckViewModel {
    pub subject: String,
    pub allowed: bool,
    pub stages: Vec<StageViewModel>,
}

#[derive(Debug, Serialize)]
pub struct UpdateViewModel {
    pub subject: String,
    pub dimension: String,
    pub patch: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LabelViewModel {
    pub subject: String,
    pub dimension: String,
    pub label: String,
}

impl CreateView for CatalogViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogView::new(self, style))
    }
}

impl CreateView for OptionsViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(OptionsView::new(self, style))
    }
}

impl CreateView for CheckViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(CheckView::new(self, style))
    }
}

impl CreateView for UpdateViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(UpdateView::new(self))
    }
}

impl CreateView for LabelViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(LabelView::new(self))
    }
}
