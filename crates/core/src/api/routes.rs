/// Path served by both person operations.
pub const PERSON_PATH: &str = "/api/person";

/// A handler selected by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CreatePerson,
    GetPerson,
}

/// Looks up the handler for an exact `(method, path)` pair.
///
/// Matching is case-sensitive and literal: no path parameters, no trailing
/// slash normalization. Methods the gateway allows but no handler implements
/// (PUT, DELETE, OPTIONS) resolve to `None`.
pub fn resolve_route(method: &str, path: &str) -> Option<Route> {
    match (method, path) {
        ("POST", PERSON_PATH) => Some(Route::CreatePerson),
        ("GET", PERSON_PATH) => Some(Route::GetPerson),
        _ => None,
    }
}
