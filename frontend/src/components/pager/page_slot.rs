//! One page of a listing.
//!
//! A slot fetches its URL once, on first render, and from then on only ever
//! changes its own content. Slots stay mounted when further pages are
//! requested, which is what keeps earlier pages visible.

use common::pagination::SlotState;
use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::props::PageSlotProps;
use crate::api::{fetch_page, FetchError};

pub enum SlotMsg<T> {
    Loaded(Vec<T>),
    Failed(FetchError),
}

pub struct PageSlot<T> {
    items: Option<Result<Vec<T>, FetchError>>,
    requested: bool,
}

impl<T> Component for PageSlot<T>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    type Message = SlotMsg<T>;
    type Properties = PageSlotProps<T>;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            items: None,
            requested: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let page = ctx.props().page;
        match msg {
            SlotMsg::Loaded(items) => {
                ctx.props()
                    .on_settled
                    .emit((page, SlotState::Loaded(items.len())));
                self.items = Some(Ok(items));
            }
            SlotMsg::Failed(error) => {
                gloo_console::error!(format!(
                    "Failed to load {}: {}",
                    ctx.props().url,
                    error
                ));
                ctx.props().on_settled.emit((page, SlotState::Failed));
                self.items = Some(Err(error));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        match &self.items {
            None => props
                .layout
                .notice("pager-loading", "Loading...".to_string()),
            Some(Err(error)) => props.layout.notice(
                "load-failure",
                format!("Failed to load page {}: {}", props.page, error),
            ),
            Some(Ok(items)) => html! {
                <>
                    { for items.iter().cloned().map(|item| props.render_item.emit(item)) }
                </>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.requested {
            self.requested = true;

            let link = ctx.link().clone();
            let url = ctx.props().url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_page::<T>(&url).await {
                    Ok(items) => link.send_message(SlotMsg::Loaded(items)),
                    Err(error) => link.send_message(SlotMsg::Failed(error)),
                }
            });
        }
    }
}
