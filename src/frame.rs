// Data model for a parsed start page.

use serde::Serialize;

/// One `label * url` entry of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A named group of links, opened by a `#` header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub name: String,
    pub links: Vec<Link>,
}

impl Frame {
    pub fn new(name: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            name: name.into(),
            links,
        }
    }
}
