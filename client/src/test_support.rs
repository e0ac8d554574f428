//! Helpers shared by the native unit tests.

use std::future::Future;
use std::task::{Context, Poll, Waker};

/// Drive a future that never actually suspends.
///
/// Off-browser the HTTP client answers `Unavailable` without awaiting
/// anything, so request paths complete on the first poll.
pub fn block_on_ready<F: Future>(fut: F) -> F::Output {
    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended"),
    }
}
