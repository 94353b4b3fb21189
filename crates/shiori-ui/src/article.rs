//! Article cards and the card list area.

use leptos::prelude::*;
use shiori_core::{CardView, ListView, Messages};

/// Texts shown in the list area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListLabels {
    pub loading: String,
    pub load_failed: String,
    pub no_results: String,
    pub read_more: String,
}

impl From<&Messages> for ListLabels {
    fn from(messages: &Messages) -> Self {
        Self {
            loading: messages.loading.clone(),
            load_failed: messages.load_failed.clone(),
            no_results: messages.no_results.clone(),
            read_more: messages.read_more.clone(),
        }
    }
}

/// Card list area.
///
/// Shows the loading, load-failure or no-results message, or one card per
/// article on the current page.
#[component]
pub fn ArticleList(
    /// What the list area shows.
    list: Signal<ListView>,
    /// Texts for the status messages and card links.
    labels: ListLabels,
) -> impl IntoView {
    let labels = StoredValue::new(labels);

    view! {
      <div id="list" class="list">
        {move || match list.get() {
          ListView::Loading => status_message(labels.with_value(|l| l.loading.clone())),
          ListView::Failed => status_message(labels.with_value(|l| l.load_failed.clone())),
          ListView::Empty => status_message(labels.with_value(|l| l.no_results.clone())),
          ListView::Cards(cards) => {
            let read_more = labels.with_value(|l| l.read_more.clone());
            cards
              .into_iter()
              .map(|card| view! { <ArticleCard card=card read_more=read_more.clone() /> })
              .collect_view()
              .into_any()
          }
        }}
      </div>
    }
}

fn status_message(text: String) -> AnyView {
    view! { <p class="list-status">{text}</p> }.into_any()
}

/// A single article card.
#[component]
pub fn ArticleCard(
    /// Card contents.
    card: CardView,
    /// Label of the link to the full article.
    #[prop(into)]
    read_more: String,
) -> impl IntoView {
    let CardView {
        title,
        excerpt,
        date_label,
        tags,
        thumb,
        url,
        ..
    } = card;

    let thumbnail = match thumb {
        Some(src) => view! { <img class="thumb" src=src alt=title.clone() /> }.into_any(),
        None => view! { <div class="thumb" aria-hidden="true"></div> }.into_any(),
    };

    view! {
      <article class="card">
        {thumbnail}
        <div class="card-body">
          <h3>{title}</h3>
          <p>{excerpt}</p>
          <div class="meta">
            <time>{date_label}</time>
            <div class="tags">
              {tags.into_iter().map(|tag| view! { <span class="t">{tag}</span> }).collect_view()}
            </div>
            <a href=url class="read-more">
              {read_more}
            </a>
          </div>
        </div>
      </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_labels_from_messages() {
        let messages = Messages::default();
        let labels = ListLabels::from(&messages);
        assert_eq!(labels.no_results, "該当する記事はありません。");
        assert_eq!(labels.load_failed, "記事データの読み込みに失敗しました。");
        assert_eq!(labels.read_more, "続きを読む");
    }
}
