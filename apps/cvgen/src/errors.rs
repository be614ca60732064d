use std::path::PathBuf;

use thiserror::Error;

use crate::cv::SectionKind;

/// Failures while building the style sheet.
#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("Invalid colour '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("Unknown style '{0}'")]
    UnknownStyle(String),

    #[error("Style '{style}' derives from unknown parent '{parent}'")]
    UnknownParent { style: String, parent: String },
}

/// Failures while laying content out on pages.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("{unit} is {height:.1}pt tall but the frame only holds {available:.1}pt")]
    TooTall {
        unit: String,
        height: f32,
        available: f32,
    },

    #[error("Table is {width:.1}pt wide but the page is only {page_width:.1}pt wide")]
    TableTooWide { width: f32, page_width: f32 },

    #[error("Character {0:?} cannot be encoded with WinAnsiEncoding")]
    Unencodable(char),

    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Pipeline-level error returned by the generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Failed to read CV content from {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CV content in {path} is not valid: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("CV sections must appear once each in the order {expected:?}, found {found:?}")]
    SectionOrder {
        expected: Vec<SectionKind>,
        found: Vec<SectionKind>,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
