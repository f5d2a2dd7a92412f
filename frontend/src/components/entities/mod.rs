//! Fetch-by-id views of single corpus entities.
//!
//! [`EntityView`] does the fetching and the loading / not found / failure
//! states; an [`EntityRender`] implementation only says which URL to fetch
//! and how to draw the loaded record. Foreign keys are rendered by nesting
//! another entity view, so every view resolves exactly one record.

use std::marker::PhantomData;

use common::endpoints::ApiUrls;
use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::api::{fetch_entity, FetchError};
use crate::config;

mod context;
mod lemma;
mod source;
mod source_kind;
mod status;

pub use context::ContextOverview;
pub use lemma::LemmaOverview;
pub use source::{SourceOverview, SourceTitle};
pub use source_kind::SourceKindLabel;
pub use status::StatusBadge;

/// Shared border of the overview tables.
pub(crate) const CELL_STYLE: &str = "border: 1px solid black; padding-right: 5px;";

/// How a fetch-by-id view draws its record.
pub trait EntityRender: 'static {
    type Entity: DeserializeOwned + 'static;

    /// What the entity is called in user-facing messages.
    const LABEL: &'static str;

    fn url(api: &ApiUrls, id: i64) -> String;

    fn render(entity: &Self::Entity) -> Html;

    fn loading() -> Html {
        html! { <span class="loading">{ "loading..." }</span> }
    }

    fn not_found(id: i64) -> Html {
        html! { <div class="not-found">{ format!("{} with id {} not found", Self::LABEL, id) }</div> }
    }

    fn failed(error: &FetchError) -> Html {
        html! { <div class="load-failure">{ format!("failed to load: {}", error) }</div> }
    }
}

/// Lifecycle of one fetch-by-id.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityState<T> {
    Loading,
    NotFound,
    Failed(FetchError),
    Loaded(T),
}

impl<T> From<Result<Option<T>, FetchError>> for EntityState<T> {
    fn from(result: Result<Option<T>, FetchError>) -> Self {
        match result {
            Ok(Some(entity)) => EntityState::Loaded(entity),
            Ok(None) => EntityState::NotFound,
            Err(error) => EntityState::Failed(error),
        }
    }
}

/// Outcome of the fetch started for `id`.
pub struct EntityMsg<T> {
    id: i64,
    state: EntityState<T>,
}

impl<T> EntityMsg<T> {
    /// Whether this outcome still belongs to the view showing `current_id`.
    fn is_current(&self, current_id: i64) -> bool {
        self.id == current_id
    }
}

#[derive(Properties, PartialEq)]
pub struct EntityProps {
    pub id: i64,
}

pub struct EntityView<R: EntityRender> {
    state: EntityState<R::Entity>,
    _render: PhantomData<R>,
}

impl<R: EntityRender> EntityView<R> {
    fn load(ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let id = ctx.props().id;
        let url = R::url(&config::get().api, id);
        yew::platform::spawn_local(async move {
            let result = fetch_entity::<R::Entity>(&url).await;
            if let Err(error) = &result {
                gloo_console::error!(format!("Failed to load {}: {}", url, error));
            }
            link.send_message(EntityMsg {
                id,
                state: EntityState::from(result),
            });
        });
    }
}

impl<R: EntityRender> Component for EntityView<R> {
    type Message = EntityMsg<R::Entity>;
    type Properties = EntityProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::load(ctx);
        Self {
            state: EntityState::Loading,
            _render: PhantomData,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        // A response for an id the view has since moved away from.
        if !msg.is_current(ctx.props().id) {
            return false;
        }
        self.state = msg.state;
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id == old_props.id {
            return false;
        }
        self.state = EntityState::Loading;
        Self::load(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.state {
            EntityState::Loading => R::loading(),
            EntityState::NotFound => R::not_found(ctx.props().id),
            EntityState::Failed(error) => R::failed(error),
            EntityState::Loaded(entity) => R::render(entity),
        }
    }
}
