use crate::{
    affordance::{
        capture::MethodInvocation,
        error::{AffordanceError, ambiguous_operation, unroutable_operation},
        ports::AffordanceHandler,
        types::{Affordance, RouteDescriptor},
    },
    config::ResolverConfig,
};

const TEMPLATE_OPERATORS: &[char] = &['+', '#', '.', '/', ';', '?', '&'];

#[derive(Debug, Clone, Default)]
pub struct AffordanceResolver {
    config: ResolverConfig,
}

impl AffordanceResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Runs `block` against a stand-in for `C` and turns the single operation it
    /// invoked into an [`Affordance`]. Nothing on `C` is executed.
    pub fn resolve<C, F>(&self, block: F) -> Result<Affordance, AffordanceError>
    where
        C: AffordanceHandler,
        F: FnOnce(&mut MethodInvocation<C>),
    {
        let mut invocation = MethodInvocation::<C>::new();
        block(&mut invocation);

        let operation = match <[C::Operation; 1]>::try_from(invocation.into_captured()) {
            Ok([operation]) => operation,
            Err(captured) if captured.is_empty() => {
                return Err(rejected::<C>(ambiguous_operation(
                    "operation block captured no operation",
                )));
            }
            Err(captured) => {
                return Err(rejected::<C>(ambiguous_operation(format!(
                    "operation block captured {} operations, expected exactly one",
                    captured.len()
                ))));
            }
        };

        let Some(route) = C::route(&operation) else {
            return Err(rejected::<C>(unroutable_operation(
                "operation is not exposed as a routable endpoint",
            )));
        };

        let affordance = self
            .affordance_from_route(C::base_path(), route)
            .map_err(rejected::<C>)?;

        tracing::debug!(
            target: "affordance",
            handler = C::handler_name(),
            name = %affordance.name,
            method = %affordance.method,
            path = %affordance.path,
            "affordance_resolved"
        );
        Ok(affordance)
    }

    fn affordance_from_route(
        &self,
        base_path: &str,
        route: RouteDescriptor,
    ) -> Result<Affordance, AffordanceError> {
        if route.name.trim().is_empty() {
            return Err(unroutable_operation("route name cannot be empty"));
        }
        let query_only = is_query_expression(&route.path);
        if !route.path.is_empty() && !route.path.starts_with('/') && !query_only {
            return Err(unroutable_operation(format!(
                "route path must start with '/': {}",
                route.path
            )));
        }
        if (route.path.is_empty() || query_only) && base_path.trim_matches('/').is_empty() {
            return Err(unroutable_operation(format!(
                "operation '{}' has no path mapping",
                route.name
            )));
        }

        let path = join_path(&[&self.config.context_path, base_path, &route.path]);
        let template_variables = template_variables(&path, self.config.strict_templates)
            .map_err(|message| unroutable_operation(format!("{message}: {path}")))?;

        Ok(Affordance {
            name: route.name,
            method: route.method,
            path,
            template_variables,
            input: route.input,
            output: route.output,
        })
    }
}

/// Resolves with a default [`AffordanceResolver`].
pub fn afford<C, F>(block: F) -> Result<Affordance, AffordanceError>
where
    C: AffordanceHandler,
    F: FnOnce(&mut MethodInvocation<C>),
{
    AffordanceResolver::default().resolve::<C, F>(block)
}

fn rejected<C: AffordanceHandler>(err: AffordanceError) -> AffordanceError {
    tracing::debug!(
        target: "affordance",
        handler = C::handler_name(),
        kind = ?err.kind,
        error = %err.message,
        "affordance_rejected"
    );
    err.with_handler(C::handler_name())
}

/// Joins path segments so exactly one `/` separates them. A trailing `/` on the last
/// segment is kept and query expressions (`{?…}`, `{&…}`) attach without a separator.
pub(crate) fn join_path(segments: &[&str]) -> String {
    let mut path = String::new();
    let mut trailing_slash = false;
    for segment in segments {
        let trimmed = segment.trim_matches('/');
        if trimmed.is_empty() {
            continue;
        }
        let query = is_query_expression(trimmed);
        if !query {
            path.push('/');
        }
        path.push_str(trimmed);
        trailing_slash = !query && segment.ends_with('/');
    }

    if path.is_empty() || trailing_slash {
        path.push('/');
    }
    path
}

fn is_query_expression(segment: &str) -> bool {
    segment.starts_with("{?") || segment.starts_with("{&")
}

/// Collects variable names from `{…}` expressions, including RFC 6570 operator forms
/// such as `{?page,size}`. Malformed expressions fail when `strict`, otherwise they are
/// skipped.
pub(crate) fn template_variables(template: &str, strict: bool) -> Result<Vec<String>, String> {
    let mut variables = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find(['{', '}']) {
        if rest[open..].starts_with('}') {
            if strict {
                return Err("unbalanced '}' in path template".to_string());
            }
            rest = &rest[open + 1..];
            continue;
        }

        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            if strict {
                return Err("unterminated '{' in path template".to_string());
            }
            break;
        };

        let expression = &after_open[..close];
        rest = &after_open[close + 1..];

        if expression.contains('{') {
            if strict {
                return Err("nested '{' in path template".to_string());
            }
            continue;
        }

        let expression = expression.trim_start_matches(TEMPLATE_OPERATORS);
        let names: Vec<&str> = expression
            .split(',')
            .map(|spec| {
                spec.split(':')
                    .next()
                    .unwrap_or_default()
                    .trim_end_matches('*')
                    .trim()
            })
            .collect();

        if names.iter().any(|name| name.is_empty()) {
            if strict {
                return Err("empty variable name in path template".to_string());
            }
            continue;
        }

        for name in names {
            if !variables.iter().any(|existing| existing == name) {
                variables.push(name.to_string());
            }
        }
    }

    Ok(variables)
}
