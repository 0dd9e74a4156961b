use std::rc::Rc;

use yew::prelude::*;

use crate::scroll::scroll_lock::ScrollLock;

/// Shared scroll lock handed down through a `ContextProvider`.
#[derive(Clone)]
pub struct ScrollLockContext(pub Rc<ScrollLock>);

impl PartialEq for ScrollLockContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_scroll_lock_context() -> Option<Rc<ScrollLock>> {
    use_context::<ScrollLockContext>().map(|ctx| ctx.0)
}

/// Holds the page scroll lock while `active` is true and while the calling
/// component stays mounted.
#[hook]
pub fn use_scroll_lock(active: bool) {
    let lock = use_scroll_lock_context();
    use_effect_with_deps(
        move |active| {
            let guard = if *active { lock.map(|l| l.acquire()) } else { None };
            move || drop(guard)
        },
        active,
    );
}
