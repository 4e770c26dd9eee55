/// Whatever owns the routed view. The router only ever asks it to refresh;
/// the host then calls [`Router::resolve`](crate::Router::resolve) when it
/// re-renders.
pub trait Host: Send + Sync {
    fn request_refresh(&self);
}

impl<F> Host for F
where
    F: Fn() + Send + Sync,
{
    fn request_refresh(&self) {
        self()
    }
}
