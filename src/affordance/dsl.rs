use crate::{
    affordance::{builder::AffordanceBuilder, error::AffordanceError, resolver::AffordanceResolver},
    link::Link,
};

/// Runs `configure` against a fresh [`AffordanceBuilder`] and attaches what it declared
/// to a copy of `link`. If `configure` fails, its error is returned and nothing is
/// attached.
///
/// ```ignore
/// let link = with_affordances(&Link::new("/orders/42", "order"), |affordances| {
///     affordances.declare::<OrderController, _>(|c| {
///         c.invoke(OrderOperation::Cancel { id: 42 });
///     })
/// })?;
/// ```
pub fn with_affordances<F>(link: &Link, configure: F) -> Result<Link, AffordanceError>
where
    F: FnOnce(&mut AffordanceBuilder<'_>) -> Result<(), AffordanceError>,
{
    with_affordances_using(&AffordanceResolver::default(), link, configure)
}

pub fn with_affordances_using<F>(
    resolver: &AffordanceResolver,
    link: &Link,
    configure: F,
) -> Result<Link, AffordanceError>
where
    F: FnOnce(&mut AffordanceBuilder<'_>) -> Result<(), AffordanceError>,
{
    let mut builder = AffordanceBuilder::new(resolver);
    configure(&mut builder)?;

    let affordances = builder.into_affordances();
    tracing::debug!(
        target: "affordance",
        href = %link.href(),
        rel = %link.rel(),
        count = affordances.len(),
        "affordances_attached"
    );
    Ok(link.and_affordances(affordances))
}

pub trait LinkAffordanceExt {
    fn and_affordances_with<F>(&self, configure: F) -> Result<Link, AffordanceError>
    where
        F: FnOnce(&mut AffordanceBuilder<'_>) -> Result<(), AffordanceError>;
}

impl LinkAffordanceExt for Link {
    fn and_affordances_with<F>(&self, configure: F) -> Result<Link, AffordanceError>
    where
        F: FnOnce(&mut AffordanceBuilder<'_>) -> Result<(), AffordanceError>,
    {
        with_affordances(self, configure)
    }
}
