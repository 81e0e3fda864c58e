//! Reading page-decoder output from JSON.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::model::PageInput;

/// Either a single page or a list of pages.
#[derive(Deserialize)]
#[serde(untagged)]
enum PagesJson {
    Many(Vec<PageInput>),
    One(PageInput),
}

impl From<PagesJson> for Vec<PageInput> {
    fn from(pages: PagesJson) -> Self {
        match pages {
            PagesJson::Many(pages) => pages,
            PagesJson::One(page) => vec![page],
        }
    }
}

/// Parse pages from a JSON string holding one page object or an array of them.
pub fn pages_from_str(json: &str) -> Result<Vec<PageInput>> {
    let pages: PagesJson = serde_json::from_str(json)?;
    Ok(pages.into())
}

/// Parse pages from a reader.
pub fn pages_from_reader<R: Read>(reader: R) -> Result<Vec<PageInput>> {
    let pages: PagesJson = serde_json::from_reader(reader)?;
    Ok(pages.into())
}

/// Parse pages from a JSON file.
pub fn pages_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PageInput>> {
    let file = File::open(path)?;
    pages_from_reader(BufReader::new(file))
}
