use common::endpoints::ApiUrls;
use common::model::Source;
use common::routes::Route;
use yew::prelude::*;

use super::{EntityRender, EntityView, SourceKindLabel, CELL_STYLE};

pub struct SourceTable;

impl EntityRender for SourceTable {
    type Entity = Source;
    const LABEL: &'static str = "Source";

    fn url(api: &ApiUrls, id: i64) -> String {
        api.source(id)
    }

    fn render(source: &Source) -> Html {
        let optional_row = |label: &'static str, value: Option<String>| match value {
            Some(value) => html! {
                <tr>
                    <td style={CELL_STYLE}>{ label }</td>
                    <td style={CELL_STYLE}>{ value }</td>
                </tr>
            },
            None => html! {},
        };

        html! {
            <table style="border-collapse: collapse;">
                <thead>
                    <tr>
                        <th colspan="2" style={CELL_STYLE}>{ source.title.clone() }</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td style={CELL_STYLE}>{ "category" }</td>
                        <td style={CELL_STYLE}><SourceKindLabel id={source.source_kind_id} /></td>
                    </tr>
                    { optional_row("author", source.author.clone()) }
                    { optional_row("language", source.lang.clone()) }
                    { optional_row("removed lemmata", source.removed_lemmata_num.map(|n| n.to_string())) }
                </tbody>
            </table>
        }
    }
}

/// Summary table of one source.
pub type SourceOverview = EntityView<SourceTable>;

pub struct SourceTitleLink;

impl EntityRender for SourceTitleLink {
    type Entity = Source;
    const LABEL: &'static str = "Source";

    fn url(api: &ApiUrls, id: i64) -> String {
        api.source(id)
    }

    fn render(source: &Source) -> Html {
        html! {
            <a href={Route::Source(source.id).href()}>{ source.title.clone() }</a>
        }
    }
}

/// Title of a source, linking to the source page.
pub type SourceTitle = EntityView<SourceTitleLink>;
