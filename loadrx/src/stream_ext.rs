use crate::RequestState;
use futures_core::stream::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension for streams of [`RequestState`] values.
///
/// Observers usually only care about a request until it settles; this trait
/// provides that cut-off without manual loop bookkeeping.
pub trait RequestStreamExt<T: Clone>: Stream<Item = RequestState<T>> {
    /// Yields states from the underlying stream and terminates after the
    /// first settled one (`Success` or `Failed`), which is still yielded.
    ///
    /// Typical use: collect an `Idle -> Loading -> settled` lifecycle from
    /// an executor's [`to_stream`] during a test or a demo.
    ///
    /// [`to_stream`]: crate::RequestExecutor::to_stream
    fn until_settled(self) -> UntilSettled<Self>
    where
        Self: Sized,
    {
        UntilSettled {
            stream: self,
            done: false,
        }
    }
}

impl<T: Clone, S> RequestStreamExt<T> for S where S: Stream<Item = RequestState<T>> {}

/// Stream returned by [`RequestStreamExt::until_settled`].
#[pin_project(project = UntilSettledProj)]
#[derive(Debug)]
#[must_use = "Streams do nothing unless polled"]
pub struct UntilSettled<S> {
    #[pin]
    stream: S,
    done: bool,
}

impl<T, S> Stream for UntilSettled<S>
where
    T: Clone,
    S: Stream<Item = RequestState<T>>,
{
    type Item = RequestState<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let UntilSettledProj { stream, done } = self.project();

        if *done {
            return Poll::Ready(None);
        }
        match stream.poll_next(cx) {
            Poll::Ready(Some(state)) => {
                if state.is_settled() {
                    *done = true;
                }
                Poll::Ready(Some(state))
            }
            Poll::Ready(None) => {
                *done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
