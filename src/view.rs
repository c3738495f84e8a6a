use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use derivative::Derivative;
use futures::future::{LocalBoxFuture, Shared};
use futures::{FutureExt, TryFutureExt};

pub type LoadResult<V> = Result<V, Arc<anyhow::Error>>;

type Loader<V> = Rc<dyn Fn() -> LocalBoxFuture<'static, LoadResult<V>>>;

/// A view resolved on first use and memoized afterwards.
///
/// Every caller waiting while a load is in flight shares the same load. A failed load is
/// forgotten so that the next call starts over.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct LazyView<V> {
    #[derivative(Debug = "ignore")]
    loader: Loader<V>,
    #[derivative(Debug = "ignore")]
    load: RefCell<Option<Shared<LocalBoxFuture<'static, LoadResult<V>>>>>,
}

impl<V: Clone + 'static> LazyView<V> {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<V>> + 'static,
    {
        Self {
            loader: Rc::new(move || loader().map_err(Arc::new).boxed_local()),
            load: RefCell::default(),
        }
    }

    pub fn ready(view: V) -> Self {
        Self::new(move || futures::future::ready(Ok(view.clone())))
    }

    pub fn is_loaded(&self) -> bool {
        self.load.borrow().as_ref().is_some_and(|load| matches!(load.peek(), Some(Ok(_))))
    }

    pub async fn load(&self) -> LoadResult<V> {
        let load = self
            .load
            .borrow_mut()
            .get_or_insert_with(|| {
                tracing::debug!("view load started");
                (self.loader)().shared()
            })
            .clone();

        let result = load.clone().await;
        if result.is_err() {
            let mut current = self.load.borrow_mut();
            if current.as_ref().is_some_and(|current| current.ptr_eq(&load)) {
                *current = None;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::channel::oneshot;

    use super::*;

    #[tokio::test]
    async fn test_load_once() {
        let calls = Rc::new(Cell::new(0));
        let view = LazyView::new({
            let calls = calls.clone();
            move || {
                calls.set(calls.get() + 1);
                async { Ok::<_, anyhow::Error>("home") }
            }
        });

        assert!(!view.is_loaded());
        assert_eq!(view.load().await.unwrap(), "home");
        assert_eq!(view.load().await.unwrap(), "home");
        assert!(view.is_loaded());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_load() {
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel::<()>();
        let rx = RefCell::new(Some(rx));
        let view = LazyView::new({
            let calls = calls.clone();
            move || {
                calls.set(calls.get() + 1);
                let rx = rx.borrow_mut().take();
                async move {
                    if let Some(rx) = rx {
                        rx.await?;
                    }
                    Ok::<_, anyhow::Error>(42)
                }
            }
        });

        let (first, second, ()) = futures::join!(view.load(), view.load(), async {
            tx.send(()).unwrap();
        });
        assert_eq!(first.unwrap(), 42);
        assert_eq!(second.unwrap(), 42);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let calls = Rc::new(Cell::new(0));
        let view = LazyView::new({
            let calls = calls.clone();
            move || {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt == 1 {
                        anyhow::bail!("network is unreachable")
                    }
                    Ok::<_, anyhow::Error>("redirect")
                }
            }
        });

        assert_eq!(view.load().await.unwrap_err().to_string(), "network is unreachable");
        assert!(!view.is_loaded());
        assert_eq!(view.load().await.unwrap(), "redirect");
        assert_eq!(calls.get(), 2);
    }
}
