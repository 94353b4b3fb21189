//! Page chrome: publish-date stamp, theme toggle and share button.

use leptos::{prelude::*, task::spawn_local};
use shiori_core::{Messages, ShareChain, Theme, ThemeController, publish_date_label};

use crate::web::{BrowserShareHost, DocumentRootTheme, LocalStoragePreferences, current_page, today};

type PageTheme = ThemeController<LocalStoragePreferences, DocumentRootTheme>;

fn page_theme(storage_key: impl Into<String>) -> PageTheme {
    ThemeController::new(LocalStoragePreferences::new(storage_key), DocumentRootTheme)
}

/// Apply the stored theme preference to the document root.
///
/// Call before mounting so the page does not render in the wrong theme.
pub fn restore_theme(storage_key: &str) -> Theme {
    page_theme(storage_key).restore()
}

/// Publish-date stamp for the moment the page was loaded.
#[component]
pub fn PublishDate(
    /// Text before the date.
    #[prop(into)]
    prefix: String,
) -> impl IntoView {
    let label = publish_date_label(&prefix, today());
    view! { <span id="publishDate" class="publish-date">{label}</span> }
}

/// Light/dark theme toggle button.
#[component]
pub fn ThemeToggle(
    /// Preference store key.
    #[prop(into)]
    storage_key: String,
    /// Button label.
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let controller = StoredValue::new(page_theme(storage_key));

    let on_click = move |_| {
        let theme = controller.with_value(|c| c.toggle());
        log::debug!("theme switched to {theme}");
    };

    let aria_label = label.clone();
    view! {
      <button id="themeToggle" type="button" class="theme-toggle" aria-label=aria_label on:click=on_click>
        {label}
      </button>
    }
}

/// Share button: native share, then clipboard, then a manual-copy prompt.
#[component]
pub fn ShareButton(
    /// Button label.
    #[prop(into)]
    label: String,
    /// Confirmation and prompt texts.
    messages: Messages,
) -> impl IntoView {
    let messages = StoredValue::new(messages);

    let on_click = move |_| {
        let chain = messages.with_value(ShareChain::standard);
        let payload = current_page();
        spawn_local(async move {
            let outcome = chain.run(&BrowserShareHost, &payload).await;
            log::debug!("share finished: {outcome:?}");
        });
    };

    view! {
      <button id="shareBtn" type="button" class="share-btn" on:click=on_click>
        {label}
      </button>
    }
}
