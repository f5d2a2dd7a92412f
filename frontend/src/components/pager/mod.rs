//! Incremental "load more" listing, generic over the item type.
//!
//! The pager owns the page counter and the end-of-data flag
//! ([`PagerState`]). Every requested page is rendered by its own
//! [`PageSlot`], keyed by its URL, which fetches that page and reports
//! back how many items it rendered. The pager shows a "Load more" button
//! until a loaded page comes back short, then an end-of-data notice.

use std::marker::PhantomData;

use common::pagination::{PagerState, SlotState};
use serde::de::DeserializeOwned;
use yew::prelude::*;

mod page_slot;
mod props;

use page_slot::PageSlot;
pub use props::{PagerLayout, PagerProps};

pub enum PagerMsg {
    LoadMore,
    Settled(u32, SlotState),
}

pub struct Pager<T> {
    state: PagerState,
    _item: PhantomData<T>,
}

impl<T> Component for Pager<T>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    type Message = PagerMsg;
    type Properties = PagerProps<T>;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            state: PagerState::new(props.fetch_query.clone(), props.page_size),
            _item: PhantomData,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PagerMsg::LoadMore => {
                self.state.request_more();
                true
            }
            PagerMsg::Settled(page, SlotState::Loaded(count)) => {
                let was_loaded = self.state.all_loaded();
                self.state.record_loaded(page, count);
                was_loaded != self.state.all_loaded()
            }
            PagerMsg::Settled(page, SlotState::Failed) => {
                self.state.record_failed(page);
                true
            }
            PagerMsg::Settled(_, SlotState::Pending) => false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.fetch_query != self.state.query() || props.page_size != self.state.page_size() {
            self.state = PagerState::new(props.fetch_query.clone(), props.page_size);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let on_settled = link.callback(|(page, state): (u32, SlotState)| PagerMsg::Settled(page, state));

        // Keys include the query so a new listing remounts every slot.
        let slots = self
            .state
            .pages()
            .map(|(page, url)| {
                html! {
                    <PageSlot<T>
                        key={url.clone()}
                        page={page}
                        url={url.clone()}
                        render_item={props.render_item.clone()}
                        layout={props.layout.clone()}
                        on_settled={on_settled.clone()}
                    />
                }
            })
            .collect::<Html>();

        let items = match &props.layout {
            PagerLayout::Table { columns } => html! {
                <table class="pager-table">
                    <thead>
                        <tr>
                            { for columns.iter().map(|column| html! {
                                <th style="text-align: left;">{ *column }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>{ slots }</tbody>
                </table>
            },
            PagerLayout::Inline => html! {
                <div class="pager-items">{ slots }</div>
            },
        };

        html! {
            <>
                { items }
                <br />
                {
                    if self.state.all_loaded() {
                        html! { <div class="pager-end">{ "All data returned. ₍ᐢ. ̫.ᐢ₎" }</div> }
                    } else {
                        html! {
                            <button onclick={link.callback(|_| PagerMsg::LoadMore)}>
                                { "Load more" }
                            </button>
                        }
                    }
                }
            </>
        }
    }
}
