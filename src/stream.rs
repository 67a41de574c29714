//! Adapters for asynchronous streams.
//!
//! These mirror the element-by-element adapters for iterators, for sources implementing
//! [`Stream`].  Multiplexed branches are themselves streams, so they can be combined with these
//! and with [`futures::StreamExt`].

use core::{
    pin::Pin,
    task::{Context, Poll},
};
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;

/// Yields every `step`-th element of a stream, starting with the first.
///
/// Returned by [`SequenceStreamExt::thin`].
#[pin_project]
#[derive(Clone, Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct Thin<S> {
    #[pin]
    stream: S,
    step: usize,
    skip: usize,
}

impl<S> Thin<S> {
    /// Create a stream of every `step`-th element of `stream`.
    ///
    /// # Panics
    /// If `step` is zero.
    pub fn new(stream: S, step: usize) -> Self {
        assert!(step > 0, "step must be nonzero");
        Self {
            stream,
            step,
            skip: 0,
        }
    }

    /// Return the original stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> Stream for Thin<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    if *this.skip == 0 {
                        *this.skip = *this.step - 1;
                        return Poll::Ready(Some(item));
                    }
                    *this.skip -= 1;
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let thinned = |len: usize| len.saturating_sub(self.skip).div_ceil(self.step);
        let (lower, upper) = self.stream.size_hint();
        (thinned(lower), upper.map(thinned))
    }
}

impl<S> FusedStream for Thin<S>
where
    S: FusedStream,
{
    fn is_terminated(&self) -> bool {
        self.stream.is_terminated()
    }
}

/// Repeats every element of a stream.
///
/// Returned by [`SequenceStreamExt::repeat_each`].
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct RepeatEach<S>
where
    S: Stream,
{
    #[pin]
    stream: S,
    times: usize,
    current: Option<S::Item>,
    remaining: usize,
}

impl<S> RepeatEach<S>
where
    S: Stream,
    S::Item: Clone,
{
    /// Create a stream that yields every element of `stream` `times` times.
    pub fn new(stream: S, times: usize) -> Self {
        Self {
            stream,
            times,
            current: None,
            remaining: 0,
        }
    }

    /// Return the original stream.
    ///
    /// Any repetitions of the current element that were not yet produced are lost.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> Stream for RepeatEach<S>
where
    S: Stream,
    S::Item: Clone,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match *this.remaining {
                0 => match this.stream.as_mut().poll_next(cx) {
                    Poll::Ready(Some(item)) => {
                        *this.current = Some(item);
                        *this.remaining = *this.times;
                    }
                    Poll::Ready(None) => return Poll::Ready(None),
                    Poll::Pending => return Poll::Pending,
                },
                1 => {
                    *this.remaining = 0;
                    return Poll::Ready(this.current.take());
                }
                _ => {
                    *this.remaining -= 1;
                    return Poll::Ready(this.current.clone());
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.stream.size_hint();
        (
            lower.saturating_mul(self.times).saturating_add(self.remaining),
            upper
                .and_then(|upper| upper.checked_mul(self.times))
                .and_then(|upper| upper.checked_add(self.remaining)),
        )
    }
}

/// Extension trait providing the adapters in this module as methods.
pub trait SequenceStreamExt: Stream {
    /// Yield every `step`-th element, starting with the first.
    ///
    /// ```
    /// use futures::{executor::block_on, stream, StreamExt};
    /// use runnel::stream::SequenceStreamExt;
    ///
    /// let thinned: Vec<_> = block_on(stream::iter(0..10).thin(3).collect());
    /// assert_eq!(thinned, [0, 3, 6, 9]);
    /// ```
    fn thin(self, step: usize) -> Thin<Self>
    where
        Self: Sized,
    {
        Thin::new(self, step)
    }

    /// Yield every element `times` times.
    fn repeat_each(self, times: usize) -> RepeatEach<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        RepeatEach::new(self, times)
    }
}

impl<S> SequenceStreamExt for S where S: Stream {}
