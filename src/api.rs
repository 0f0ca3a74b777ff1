use crate::metrics;
use crate::twoface::Fallible;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

pub mod assets;
pub mod userfacing;
pub mod views;

/// Handler state: a shared handle to the post store. Built once in `main` and
/// cloned into every worker, so all requests see the same posts.
#[derive(Clone)]
pub struct State<DS> {
    pub ds: Arc<DS>,
}

/// Execute the closure, then log its operational metrics, e.g. time taken, whether it returned Ok/Err, etc.
async fn observe<F, Fut, R>(name: &'static str, f: F) -> Fallible<R>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Fallible<R>>,
{
    let start = Instant::now();
    let return_val = f().await;
    let duration = start.elapsed();
    metrics::HANDLER_SECS
        .with_label_values(&[name])
        .observe(duration.as_secs_f64());
    metrics::RESPONSES
        .with_label_values(&[name, variant_name(&return_val)])
        .inc();
    return_val
}

fn variant_name<T, E>(result: &Result<T, E>) -> &'static str {
    if result.is_ok() {
        "ok"
    } else {
        "err"
    }
}
