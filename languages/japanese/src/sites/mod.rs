//! Profiles for the jitenon.jp dictionaries

use std::sync::LazyLock;

use regex::Regex;

pub mod kotowaza;
pub mod yoji;

pub use kotowaza::{KotowazaFields, KotowazaProfile};
pub use yoji::{YojiFields, YojiProfile};

/// `jitenon.jp` with an optional captured subdomain
pub(crate) static JITENON_NETLOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([A-Za-z0-9.\-]+)\.)?jitenon\.jp$").expect("valid regex")
});

static ENTRY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)\.[A-Za-z]+(?:[?#].*)?$").expect("valid regex"));

/// Numeric entry id from an entry page URL like `…/cat/1234.html`
pub fn entry_id_from_url(url: &str) -> Option<u32> {
    ENTRY_ID.captures(url)?[1].parse().ok()
}
