//! Internationalization (i18n) support for `profilescope-ui`.
//!
//! Built on `i18n-embed` (language selection + asset loading), `fluent`
//! (message formatting), `rust-embed` (compile-time embedding of `.ftl`
//! files) and `i18n-embed-fl` (the `fl!` macro, checked at compile time).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/profilescope_ui.ftl   (fallback/reference)
//!   lv-LV/profilescope_ui.ftl
//! ```
//!
//! Usage (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("button-analyze");
//! ```
//!
//! Platform notes:
//! - Desktop: `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routing every lookup through the shared [`LOADER`].
///
/// ```ignore
/// let label = t!("button-analyze");
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
/// `fl!` derives the domain from `CARGO_CRATE_NAME`, hence the underscore.
const DOMAIN: &str = "profilescope_ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load localization bundles for the requested languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Tags that do not parse or are not embedded
/// are ignored and leave the current language in place.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    let canonical = lang.to_string();
    if !available_languages().iter().any(|l| *l == canonical) {
        debug!(lang = %canonical, "no bundle for requested language; keeping current");
        return Ok(());
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language currently in effect.
pub fn current_language() -> String {
    init();
    LOADER.current_language().to_string()
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
