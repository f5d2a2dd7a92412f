//! One view per client route.
//!
//! Pages are plain functions of their route parameters; all state lives in the
//! components they mount.

use common::endpoints::SourceFilter;
use common::model::{Context as CorpusContext, Lemma, Source, StatusVal};
use common::routes::{Route, RouteError};
use yew::prelude::*;

use crate::components::entities::{ContextOverview, LemmaOverview, SourceOverview};
use crate::components::listings::{
    context_item, lemma_layout, lemma_row, source_layout, source_row,
};
use crate::components::pager::Pager;
use crate::config;

/// Renders the page for a resolved route, or the message for a route that
/// could not be resolved. Invalid routes never fetch anything.
pub fn render(route: &Result<Route, RouteError>) -> Html {
    match route {
        Ok(Route::Home) => home(),
        Ok(Route::Contexts) => contexts(),
        Ok(Route::Context(id)) => context(*id),
        Ok(Route::Lemma(id)) => lemma(*id),
        Ok(Route::Source(id)) => source(*id),
        Ok(Route::Sources(filter)) => sources(filter),
        Ok(Route::Status(value)) => status(*value),
        Err(error) => html! { <div class="invalid-route">{ error.to_string() }</div> },
    }
}

fn home() -> Html {
    let links = std::iter::once(Route::Contexts)
        .chain(std::iter::once(Route::Sources(SourceFilter::default())))
        .chain(StatusVal::ALL.into_iter().map(Route::Status));

    html! {
        <ul style="list-style-type: none; padding-left: 0; margin-top: 0;">
            { for links.map(|route| {
                let href = route.href();
                html! { <li><a href={href.clone()}>{ href }</a></li> }
            }) }
        </ul>
    }
}

fn contexts() -> Html {
    let config = config::get();
    html! {
        <Pager<CorpusContext>
            fetch_query={config.api.contexts()}
            page_size={config.page_size}
            render_item={context_item(None)}
        />
    }
}

fn context(id: i64) -> Html {
    html! { <ContextOverview id={id} /> }
}

fn lemma(id: i64) -> Html {
    let config = config::get();
    html! {
        <>
            <LemmaOverview id={id} />
            <br />
            <Pager<CorpusContext>
                fetch_query={config.api.lemma_contexts(id)}
                page_size={config.page_size}
                render_item={context_item(Some(id))}
            />
        </>
    }
}

fn source(id: i64) -> Html {
    let config = config::get();
    html! {
        <>
            <SourceOverview id={id} />
            <br />
            <Pager<CorpusContext>
                fetch_query={config.api.source_contexts(id)}
                page_size={config.page_size}
                render_item={context_item(None)}
            />
        </>
    }
}

fn sources(filter: &SourceFilter) -> Html {
    let config = config::get();
    html! {
        <Pager<Source>
            fetch_query={config.api.sources(filter)}
            page_size={config.page_size}
            render_item={source_row()}
            layout={source_layout()}
        />
    }
}

fn status(status: StatusVal) -> Html {
    let config = config::get();
    html! {
        <Pager<Lemma>
            fetch_query={config.api.status_lemmata(status)}
            page_size={config.page_size}
            render_item={lemma_row()}
            layout={lemma_layout()}
        />
    }
}
