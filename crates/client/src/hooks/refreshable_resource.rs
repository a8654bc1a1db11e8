use std::{future::Future, marker::PhantomData};

use dioxus::{
    hooks::{use_context, use_context_provider, use_resource, Resource},
    signals::{ReadableExt, Signal},
};

/// Context entry that ties a refresh trigger to the resource output type `T`.
pub struct RefreshTrigger<T> {
    signal: Signal<()>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Clone for RefreshTrigger<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RefreshTrigger<T> {}

/// `use_resource` whose future can be re-run from any descendant component.
///
/// Descendants fetch the trigger with `use_refresh_resource::<T>()`, where `T`
/// is the resource's output type, and set it to re-run the future.
///
/// ```rust,ignore
/// // Screen owning the list
/// let groups = use_refreshable_resource(move || async move { load_groups().await });
///
/// // Dialog further down the tree
/// let mut refresh = use_refresh_resource::<GroupList>();
/// rsx! { button { onclick: move |_| refresh.set(()), "Reload" } }
/// ```
pub fn use_refreshable_resource<T, F>(mut future: impl FnMut() -> F + 'static) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let trigger = use_context_provider(|| RefreshTrigger::<T> {
        signal: Signal::new(()),
        _output: PhantomData,
    });
    use_resource(move || {
        trigger.signal.read();
        future()
    })
}

/// See `use_refreshable_resource`.
pub fn use_refresh_resource<T>() -> Signal<()>
where
    T: 'static,
{
    use_context::<RefreshTrigger<T>>().signal
}
