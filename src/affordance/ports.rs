use crate::affordance::types::RouteDescriptor;

/// A type whose operations are routable actions on a resource.
///
/// `Operation` names one operation, typically as an enum whose variants carry the
/// arguments the operation would be called with.
pub trait AffordanceHandler {
    type Operation;

    fn handler_name() -> &'static str;

    /// Mapping shared by every operation of the handler, joined before the route path.
    fn base_path() -> &'static str {
        ""
    }

    /// Returns `None` when the operation is not exposed as a routable endpoint.
    fn route(operation: &Self::Operation) -> Option<RouteDescriptor>;
}
