//! Renderer-agnostic report structure.

use chrono::NaiveDate;
use guide_core::GuideKind;
use serde::Serialize;

/// One typed piece of report content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    Table {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Paragraph {
        text: String,
    },
    BulletList {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<String>,
    },
    Stat {
        value: String,
        label: String,
    },
}

/// A titled group of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn paragraph(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.blocks.push(Block::Paragraph { text: text.into() });
        self
    }

    /// A titled note, rendered as a paragraph of the form `"Title: text"`.
    pub fn callout(
        self,
        title: &str,
        text: &str,
    ) -> Self {
        self.paragraph(format!("{title}: {text}"))
    }

    pub fn bullets<I, S>(
        mut self,
        title: Option<&str>,
        items: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks.push(Block::BulletList {
            title: title.map(str::to_string),
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn table<C, R>(
        mut self,
        title: Option<&str>,
        columns: C,
        rows: R,
    ) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = Vec<String>>,
    {
        self.blocks.push(Block::Table {
            title: title.map(str::to_string),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows.into_iter().collect(),
        });
        self
    }

    pub fn stat(
        mut self,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.blocks.push(Block::Stat {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A complete report for one guide session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub guide: GuideKind,
    pub title: String,
    pub subtitle: String,
    pub generated_on: NaiveDate,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn section(
        &self,
        title: &str,
    ) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// Titles in report order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|section| section.title.as_str()).collect()
    }
}
