pub mod builder;
pub mod capture;
pub mod dsl;
pub mod error;
pub mod ports;
pub mod resolver;
pub mod types;

pub use builder::AffordanceBuilder;
pub use capture::MethodInvocation;
pub use dsl::{LinkAffordanceExt, with_affordances, with_affordances_using};
pub use error::{AffordanceError, AffordanceErrorKind};
pub use ports::AffordanceHandler;
pub use resolver::{AffordanceResolver, afford};
pub use types::{Affordance, HttpMethod, RouteDescriptor, SchemaRef};
