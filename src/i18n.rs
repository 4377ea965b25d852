// SPDX-License-Identifier: GPL-3.0-or-later
// src/i18n.rs
//
// Fluent localization: embedded catalogs and the `fl!` lookup macro.

use std::sync::LazyLock;

use i18n_embed::fluent::{FluentLanguageLoader, fluent_language_loader};
use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed::{DefaultLocalizer, LanguageLoader, Localizer};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();
    if let Err(e) = loader.load_fallback_language(&Localizations) {
        log::error!("Failed to load fallback language: {e}");
    }
    // Plain text for terminals; no bidi isolation marks around arguments.
    loader.set_use_isolating(false);
    loader
});

/// Look up a localized message by id, with optional named arguments.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};
    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

pub fn localizer() -> Box<dyn Localizer> {
    Box::new(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

/// Select the best available catalog for the requested languages.
pub fn init(requested_languages: &[LanguageIdentifier]) {
    if let Err(e) = localizer().select(requested_languages) {
        log::warn!("Failed to select localization: {e}");
    }
}
