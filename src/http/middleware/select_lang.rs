//! Language selection middleware.
//! Resolves every configured variable once per request.

use axum::{
    body::Body,
    extract::State,
    http::{header::ACCEPT_LANGUAGE, Request},
    middleware::Next,
    response::Response,
};

use crate::http::cookie::{find_cookie, LANG_COOKIE};
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::variables::SelectedLanguages;

pub async fn select_lang_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let selected: SelectedLanguages = {
        let variables = state.variables.load();
        let headers = req.headers();
        let cookie = find_cookie(headers, LANG_COOKIE);
        let accept_language = headers.get(ACCEPT_LANGUAGE).map(|v| v.as_bytes());

        let selections = variables.select_all(cookie, accept_language);
        for (variable, selection) in &selections {
            metrics::record_selection(variable, selection.source);
            tracing::debug!(
                request_id = %request_id(&req),
                variable = %variable,
                lang = %selection.alias,
                source = %selection.source,
                "Language selected"
            );
        }
        selections.into_iter().collect()
    };

    req.extensions_mut().insert(selected);
    next.run(req).await
}
