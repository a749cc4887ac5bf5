//! Capability negotiation
//!
//! Optional runtime features (validation layers, extensions) are identified
//! by name. Before asking the runtime for any of them we check the names
//! against the catalog the runtime reports. Catalogs hold tens of entries,
//! so a nested linear scan is fine.

/// `true` iff every requested name has an exact, case-sensitive match in `available`.
///
/// An empty request is always satisfied.
pub fn check_feature_support<R, A>(requested: &[R], available: &[A]) -> bool
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    requested
        .iter()
        .all(|name| is_available(name.as_ref(), available))
}

/// Requested names absent from `available`, in request order.
pub fn missing_features<R, A>(requested: &[R], available: &[A]) -> Vec<String>
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    requested
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !is_available(name, available))
        .map(str::to_owned)
        .collect()
}

fn is_available<A: AsRef<str>>(name: &str, available: &[A]) -> bool {
    available.iter().any(|candidate| candidate.as_ref() == name)
}
