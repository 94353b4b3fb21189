//! Search box for the article browser.

use leptos::prelude::*;

/// Search text input.
///
/// Every input event is reported; there is no debounce.
#[component]
pub fn SearchBox(
    /// Placeholder text for the input.
    #[prop(into)]
    placeholder: String,
    /// Current query, kept in sync with the browser state.
    query: Signal<String>,
    /// Called with the full input value on every keystroke.
    on_search: Callback<String>,
) -> impl IntoView {
    view! {
      <div class="search-box">
        <input
          id="q"
          type="search"
          class="search-input"
          autocomplete="off"
          aria-label=placeholder.clone()
          placeholder=placeholder
          prop:value=move || query.get()
          on:input=move |ev| {
            on_search.run(event_target_value(&ev));
          }
        />
      </div>
    }
}
