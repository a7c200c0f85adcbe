use leptos::Owner;

/// Utility to run a closure inside an owner captured before an `.await`.
/// If there was no owner, or it has been disposed since (the component unmounted),
/// logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        leptos::logging::log!("[OWNER] No Leptos owner captured: {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            leptos::logging::log!("[OWNER] Owner disposed, dropping update: {}", log_context);
            None
        }
    }
}
