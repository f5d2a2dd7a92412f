use common::endpoints::ApiUrls;
use common::format::date_prefix;
use common::model::Lemma;
use yew::prelude::*;

use super::{EntityRender, EntityView, StatusBadge, CELL_STYLE};

pub struct LemmaTable;

impl EntityRender for LemmaTable {
    type Entity = Lemma;
    const LABEL: &'static str = "Lemma";

    fn url(api: &ApiUrls, id: i64) -> String {
        api.lemma(id)
    }

    fn render(lemma: &Lemma) -> Html {
        html! {
            <table style="border-collapse: collapse;">
                <thead>
                    <tr>
                        <th colspan="2" style={CELL_STYLE}>{ lemma.lemma.clone() }</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td style={CELL_STYLE}>{ "created" }</td>
                        <td style={CELL_STYLE}>{ date_prefix(&lemma.created).to_string() }</td>
                    </tr>
                    <tr>
                        <td style={CELL_STYLE}>{ "status" }</td>
                        <td style={CELL_STYLE}><StatusBadge id={lemma.status_id} /></td>
                    </tr>
                </tbody>
            </table>
        }
    }
}

/// Summary table of one lemma.
pub type LemmaOverview = EntityView<LemmaTable>;
