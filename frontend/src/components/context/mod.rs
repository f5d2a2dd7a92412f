//! Rendering of a single context.
//!
//! The annotated `context_value` is decoded once per context (and again only
//! when the context prop changes). Plain tokens become text nodes, lemma
//! references become links to the lemma page. A context that cannot be
//! decoded renders a parse failure in its own place and nothing else is
//! affected.

use common::annotation::Token;
use common::model::Context as CorpusContext;
use common::routes::Route;
use yew::prelude::*;

const HIGHLIGHT_STYLE: &str = "background-color: yellow;";
const HOVER_BORDER_STYLE: &str = "border: 1.5px solid black;";
const HOVER_BACKGROUND_STYLE: &str = "background-color: rgb(229 238 254);";

#[derive(Properties, PartialEq)]
pub struct ContextViewProps {
    pub context: CorpusContext,
    /// References to this lemma get a highlighted background.
    #[prop_or_default]
    pub highlighted_lemma_id: Option<i64>,
}

pub enum Msg {
    Hover(bool),
}

pub struct ContextView {
    tokens: Result<Vec<Token>, String>,
    hovered: bool,
}

impl ContextView {
    fn decode(context: &CorpusContext) -> Result<Vec<Token>, String> {
        context.tokens().map_err(|error| {
            gloo_console::error!(format!("Context {}: {}", context.id, error));
            error.to_string()
        })
    }
}

impl Component for ContextView {
    type Message = Msg;
    type Properties = ContextViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            tokens: Self::decode(&ctx.props().context),
            hovered: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hover(hovered) => {
                let changed = self.hovered != hovered;
                self.hovered = hovered;
                changed
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().context != old_props.context {
            self.tokens = Self::decode(&ctx.props().context);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let context_id = props.context.id;

        let body = match &self.tokens {
            Ok(tokens) => render_tokens(tokens, props.highlighted_lemma_id),
            Err(error) => html! {
                <span class="context-parse-failure">
                    { format!("Could not read context {}: {}", context_id, error) }
                </span>
            },
        };

        html! {
            <span
                id={context_id.to_string()}
                class="context"
                onmouseover={link.callback(|_| Msg::Hover(true))}
                onmouseleave={link.callback(|_| Msg::Hover(false))}
            >
                { " " }
                <a href={Route::Context(context_id).href()} style="text-decoration: none;">
                    <span style={if self.hovered { HOVER_BORDER_STYLE } else { "" }}>{ "§" }</span>
                </a>
                { " " }
                <span style={if self.hovered { HOVER_BACKGROUND_STYLE } else { "" }}>
                    { body }
                </span>
            </span>
        }
    }
}

/// Renders decoded tokens in order, one node per token.
pub fn render_tokens(tokens: &[Token], highlighted_lemma_id: Option<i64>) -> Html {
    tokens
        .iter()
        .map(|token| match token {
            Token::Text(value) => html! { { value.clone() } },
            Token::LemmaRef { text, lemma_id } => {
                let style = if token.is_highlighted(highlighted_lemma_id) {
                    HIGHLIGHT_STYLE
                } else {
                    ""
                };
                html! {
                    <a href={Route::Lemma(*lemma_id).href()} style={style}>{ text.clone() }</a>
                }
            }
        })
        .collect::<Html>()
}
