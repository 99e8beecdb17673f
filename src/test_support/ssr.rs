use leptos::*;

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let value = f();
    runtime.dispose();
    value
}

/// Renders a view to HTML with resource fetchers suppressed, so components
/// built around `create_resource` render synchronously on the host.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    struct SuppressGuard;

    impl Drop for SuppressGuard {
        fn drop(&mut self) {
            leptos_reactive::suppress_resource_load(false);
        }
    }

    leptos_reactive::suppress_resource_load(true);
    let _guard = SuppressGuard;
    with_runtime(move || view().into_view().render_to_string().to_string())
}
