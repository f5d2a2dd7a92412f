//! Item renderers and layouts of the paginated listings.

use common::model::{Context as CorpusContext, Lemma, Source};
use common::routes::Route;
use yew::prelude::*;

use super::context::ContextView;
use super::entities::SourceKindLabel;
use super::pager::PagerLayout;

pub fn lemma_layout() -> PagerLayout {
    PagerLayout::Table {
        columns: vec!["id", "lemma", "created"],
    }
}

pub fn source_layout() -> PagerLayout {
    PagerLayout::Table {
        columns: vec!["id", "title", "category"],
    }
}

pub fn lemma_row() -> Callback<Lemma, Html> {
    Callback::from(|lemma: Lemma| {
        html! {
            <tr key={lemma.id.to_string()}>
                <td>{ lemma.id.to_string() }</td>
                <td><a href={Route::Lemma(lemma.id).href()}>{ lemma.lemma }</a></td>
                <td>{ lemma.created }</td>
            </tr>
        }
    })
}

pub fn source_row() -> Callback<Source, Html> {
    Callback::from(|source: Source| {
        html! {
            <tr key={source.id.to_string()}>
                <td>{ source.id.to_string() }</td>
                <td><a href={Route::Source(source.id).href()}>{ source.title }</a></td>
                <td><SourceKindLabel id={source.source_kind_id} /></td>
            </tr>
        }
    })
}

/// Renders contexts inline, highlighting references to `highlighted_lemma_id`.
pub fn context_item(highlighted_lemma_id: Option<i64>) -> Callback<CorpusContext, Html> {
    Callback::from(move |context: CorpusContext| {
        let key = context.id.to_string();
        html! {
            <ContextView
                key={key}
                context={context}
                highlighted_lemma_id={highlighted_lemma_id}
            />
        }
    })
}
