//! Properties shared by the pager and its page slots.

use common::pagination::SlotState;
use yew::prelude::*;

/// How a listing lays out its items.
#[derive(Clone, PartialEq)]
pub enum PagerLayout {
    /// A table with these header cells; each item renders a `<tr>`.
    Table { columns: Vec<&'static str> },
    /// Items flow inline, as contexts do.
    Inline,
}

impl PagerLayout {
    /// Wraps a status line so it fits the layout.
    pub fn notice(&self, class: &'static str, message: String) -> Html {
        match self {
            PagerLayout::Table { columns } => html! {
                <tr class={class}>
                    <td colspan={columns.len().max(1).to_string()}>{ message }</td>
                </tr>
            },
            PagerLayout::Inline => html! {
                <div class={class}>{ message }</div>
            },
        }
    }
}

/// Properties of a [`super::Pager`].
#[derive(Properties, PartialEq)]
pub struct PagerProps<T: PartialEq + 'static> {
    /// Listing URL without `page` and `page_size`.
    pub fetch_query: String,
    pub page_size: u32,
    /// Renders one item of a page.
    pub render_item: Callback<T, Html>,
    #[prop_or(PagerLayout::Inline)]
    pub layout: PagerLayout,
}

/// Properties of one page slot.
#[derive(Properties, PartialEq)]
pub struct PageSlotProps<T: PartialEq + 'static> {
    pub page: u32,
    pub url: String,
    pub render_item: Callback<T, Html>,
    pub layout: PagerLayout,
    /// Reports how the page fetch ended.
    pub on_settled: Callback<(u32, SlotState)>,
}
