//! Page Routing
//!
//! Maps the browser path to a page and keeps it in a signal.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ItemList,
    ItemDetail(u32),
    RegisterItem,
    Signup,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::ItemList,
            ["detail", id] => id.parse().map(Route::ItemDetail).unwrap_or(Route::NotFound),
            ["register"] => Route::RegisterItem,
            ["signup"] => Route::Signup,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::ItemList | Route::NotFound => "/".to_string(),
            Route::ItemDetail(id) => format!("/detail/{}", id),
            Route::RegisterItem => "/register".to_string(),
            Route::Signup => "/signup".to_string(),
        }
    }
}

/// Current page plus history navigation
#[derive(Clone, Copy)]
pub struct Router {
    route: RwSignal<Route>,
}

impl Router {
    /// Start at the page for the current location and follow back/forward
    pub fn new() -> Self {
        let route = RwSignal::new(Route::parse(&current_path()));
        if let Some(window) = web_sys::window() {
            let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
                route.set(Route::parse(&current_path()));
            });
            if window
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("popstate listener not installed");
            }
            // The router lives as long as the page
            on_popstate.forget();
        }
        Self { route }
    }

    pub fn route(&self) -> Route {
        self.route.get()
    }

    pub fn navigate(&self, to: Route) {
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.push_state_with_url(&JsValue::NULL, "", Some(to.path().as_str())));
        if let Some(Err(err)) = pushed {
            log::warn!("history push failed: {:?}", err);
        }
        self.route.set(to);
    }

    pub fn back(&self) {
        match web_sys::window().and_then(|w| w.history().ok()) {
            Some(history) => {
                if let Err(err) = history.back() {
                    log::warn!("history back failed: {:?}", err);
                }
            }
            None => self.route.set(Route::ItemList),
        }
    }

    /// Full page reload so server-side state is fetched again
    pub fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                log::error!("reload failed: {:?}", err);
            }
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Route::ItemList);
        assert_eq!(Route::parse(""), Route::ItemList);
        assert_eq!(Route::parse("/detail/5"), Route::ItemDetail(5));
        assert_eq!(Route::parse("/detail/5/"), Route::ItemDetail(5));
        assert_eq!(Route::parse("/detail/abc"), Route::NotFound);
        assert_eq!(Route::parse("/detail"), Route::NotFound);
        assert_eq!(Route::parse("/register"), Route::RegisterItem);
        assert_eq!(Route::parse("/signup"), Route::Signup);
        assert_eq!(Route::parse("/admin"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips() {
        for route in [Route::ItemList, Route::ItemDetail(42), Route::RegisterItem, Route::Signup] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
