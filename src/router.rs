// ============================================================================
// ROUTER - three screens mapped onto browser paths
// ============================================================================

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
    Signup,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
        }
    }

    /// Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            _ => Route::Dashboard,
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard)
    }

    /// Redirects protected routes to the login screen when there is no token.
    pub fn guard(self, authenticated: bool) -> Self {
        if self.requires_auth() && !authenticated {
            Route::Login
        } else {
            self
        }
    }
}

/// Guard redirect for the route the address bar shows; `None` when it may
/// be displayed as is.
pub fn redirect_for(location: Route, authenticated: bool) -> Option<Route> {
    let allowed = location.guard(authenticated);
    (allowed != location).then_some(allowed)
}

/// Route matching the address bar.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Dashboard)
}

fn history() -> Option<web_sys::History> {
    let history = web_sys::window().and_then(|w| w.history().ok());
    if history.is_none() {
        log::warn!("⚠️ History API not available");
    }
    history
}

/// Pushes the route onto the browser history without reloading.
pub fn push_route(route: Route) {
    let Some(history) = history() else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
        log::error!("❌ Could not push route {}: {:?}", route.path(), e);
    }
}

/// Swaps the current history entry; used for guard redirects so the
/// blocked URL is not left behind for the back button.
pub fn replace_route(route: Route) {
    let Some(history) = history() else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(route.path())) {
        log::error!("❌ Could not replace route {}: {:?}", route.path(), e);
    }
}
