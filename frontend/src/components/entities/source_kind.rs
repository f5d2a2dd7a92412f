use common::endpoints::{ApiUrls, SourceFilter};
use common::model::SourceKind;
use common::routes::Route;
use yew::prelude::*;

use super::{EntityRender, EntityView};

pub struct SourceKindLink;

impl EntityRender for SourceKindLink {
    type Entity = SourceKind;
    const LABEL: &'static str = "Source kind";

    fn url(api: &ApiUrls, id: i64) -> String {
        api.source_kind(id)
    }

    fn render(kind: &SourceKind) -> Html {
        let href = Route::Sources(SourceFilter::by_kind(kind.id)).href();
        html! {
            <span>
                <a href={href}>{ kind.kind.clone() }</a>
            </span>
        }
    }
}

/// Kind of a source, linking to every source of that kind.
pub type SourceKindLabel = EntityView<SourceKindLink>;
