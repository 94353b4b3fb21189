use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use shiori_core::Config;
use shiori_ui::{ArticleBrowser, PublishDate, ShareButton, ThemeToggle, restore_theme};

/// Prepare the document before mounting.
///
/// Applies the stored theme preference so the first paint already uses it.
pub fn init_chrome(config: &Config) {
    let theme = restore_theme(&config.theme.storage_key);
    log::debug!("restored {theme} theme");
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let Config {
        site,
        theme,
        chrome,
        messages,
    } = config;

    let publish_date = chrome.publish_date.then(|| {
        view! { <PublishDate prefix=messages.publish_date_prefix.clone() /> }
    });
    let theme_toggle = chrome.theme_toggle.then(|| {
        view! { <ThemeToggle storage_key=theme.storage_key.clone() label=messages.theme_toggle.clone() /> }
    });
    let share = chrome.share.then(|| {
        view! { <ShareButton label=messages.share.clone() messages=messages.clone() /> }
    });

    view! {
      // sets the document title
      <Title text=site.title.clone() />

      <header class="site-header">
        <h1 class="site-title">{site.title}</h1>
        <div class="site-chrome">{publish_date}{theme_toggle}{share}</div>
      </header>

      <main>
        <ArticleBrowser data_url=site.data_url page_size=site.page_size messages=messages />
      </main>
    }
}
