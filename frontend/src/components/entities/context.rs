use common::endpoints::ApiUrls;
use common::format::date_prefix;
use common::model::Context as CorpusContext;
use yew::prelude::*;

use super::{EntityRender, EntityView, SourceTitle};
use crate::components::context::ContextView;

pub struct ContextDetail;

impl EntityRender for ContextDetail {
    type Entity = CorpusContext;
    const LABEL: &'static str = "Context";

    fn url(api: &ApiUrls, id: i64) -> String {
        api.context(id)
    }

    fn render(context: &CorpusContext) -> Html {
        html! {
            <div class="context-detail">
                <p><ContextView context={context.clone()} /></p>
                <div>
                    { "from " }
                    <SourceTitle id={context.source_id} />
                    { format!(", added {}", date_prefix(&context.created)) }
                </div>
            </div>
        }
    }
}

/// One context with its source.
pub type ContextOverview = EntityView<ContextDetail>;
