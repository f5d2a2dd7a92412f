use common::endpoints::ApiUrls;
use common::model::Status;
use common::routes::Route;
use yew::prelude::*;

use super::{EntityRender, EntityView};

pub struct StatusLabel;

impl EntityRender for StatusLabel {
    type Entity = Status;
    const LABEL: &'static str = "Status";

    fn url(api: &ApiUrls, id: i64) -> String {
        api.status(id)
    }

    fn render(status: &Status) -> Html {
        html! {
            <a href={Route::Status(status.status).href()}>
                <span style={format!("color: {};", status.status.colour())}>
                    { status.status.as_str() }
                </span>
            </a>
        }
    }
}

/// Workflow status of a lemma, coloured by stage.
pub type StatusBadge = EntityView<StatusLabel>;
