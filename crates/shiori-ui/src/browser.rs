//! The article browser: search, tag bar, card list and pagination.

use leptos::{prelude::*, task::spawn_local};
use shiori_core::{BrowseCommand, BrowserState, Messages, PaginationView, TagBarView};

use crate::{
    article::{ArticleList, ListLabels},
    search::SearchBox,
    web::fetch_index,
};

/// CSS class for a toggle button, with `active` appended when selected.
pub fn button_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// Article browser component.
///
/// Fetches the article index once on creation, then re-derives and
/// re-renders the view on every command.
#[component]
pub fn ArticleBrowser(
    /// URL of the article index document.
    #[prop(into)]
    data_url: String,
    /// Cards per page.
    #[prop(default = 6)]
    page_size: usize,
    /// User-visible strings.
    messages: Messages,
) -> impl IntoView {
    let state = RwSignal::new(BrowserState::new(page_size));
    let view_model = Memo::new(move |_| state.with(BrowserState::view));
    let query = Signal::derive(move || state.with(|s| s.filter().query.clone()));
    let on_command = Callback::new(move |command: BrowseCommand| {
        state.update(|s| s.dispatch(command));
    });

    spawn_local(async move {
        let result = fetch_index(&data_url).await;
        if let Ok(index) = &result {
            log::info!("loaded {} articles from {data_url}", index.len());
        }
        // the component may be gone by the time the fetch settles
        let _ = state.try_update(|s| s.finish_load(result));
    });

    let labels = ListLabels::from(&messages);
    let Messages {
        all_tags,
        search_placeholder,
        ..
    } = messages;

    view! {
      <section class="article-browser">
        <SearchBox
          placeholder=search_placeholder
          query=query
          on_search=Callback::new(move |text| on_command.run(BrowseCommand::Search(text)))
        />
        <TagBar
          bar=Signal::derive(move || view_model.with(|v| v.tag_bar.clone()))
          all_label=all_tags
          on_command=on_command
        />
        <ArticleList list=Signal::derive(move || view_model.with(|v| v.list.clone())) labels=labels />
        <Pagination
          pagination=Signal::derive(move || view_model.with(|v| v.pagination.clone()))
          on_command=on_command
        />
      </section>
    }
}

/// Tag selector bar: an "all" button followed by one button per tag.
#[component]
pub fn TagBar(
    /// Tag bar contents; nothing is rendered until the index is loaded.
    bar: Signal<Option<TagBarView>>,
    /// Label of the "all" button.
    #[prop(into)]
    all_label: String,
    /// Receives `ClearTag` and `ToggleTag` commands.
    on_command: Callback<BrowseCommand>,
) -> impl IntoView {
    let all_label = StoredValue::new(all_label);

    view! {
      <div id="tagFilters" class="tag-filters">
        {move || {
          bar
            .get()
            .map(|bar| {
              let chips = bar
                .tags
                .into_iter()
                .map(|chip| {
                  let tag = chip.name.clone();
                  view! {
                    <button
                      type="button"
                      class=button_class("tag-btn", chip.active)
                      on:click=move |_| on_command.run(BrowseCommand::ToggleTag(tag.clone()))
                    >
                      {chip.name}
                    </button>
                  }
                })
                .collect_view();

              view! {
                <button
                  type="button"
                  class=button_class("tag-btn", bar.all_active)
                  on:click=move |_| on_command.run(BrowseCommand::ClearTag)
                >
                  {all_label.get_value()}
                </button>
                {chips}
              }
            })
        }}
      </div>
    }
}

/// Page number buttons. Renders nothing for a single page.
#[component]
pub fn Pagination(
    /// Buttons to show.
    pagination: Signal<PaginationView>,
    /// Receives `GoToPage` commands.
    on_command: Callback<BrowseCommand>,
) -> impl IntoView {
    view! {
      <nav id="pagination" class="pagination" aria-label="Pagination">
        {move || {
          pagination
            .get()
            .buttons
            .into_iter()
            .map(|button| {
              let number = button.number;
              view! {
                <button
                  type="button"
                  class=button_class("page-btn", button.active)
                  aria-current=button.active.then_some("page")
                  on:click=move |_| on_command.run(BrowseCommand::GoToPage(number))
                >
                  {number}
                </button>
              }
            })
            .collect_view()
        }}
      </nav>
    }
}
