#![cfg_attr(docsrs, feature(doc_cfg))]
//! Runnel provides combinators for lazy sequences, centred on a multiplexer that lets several
//! consumers read one single-pass source at their own pace.
//!
//! * [`multiplex`] copies a sequence, buffering only what the slowest copy still needs.
//! * [`basic`], [`batch`], [`select`] and [`combine`] transform and join sequences.
//! * [`push`] builds push-driven pipelines.
//! * [`sampler`] draws stratified samples from several classes.
//! * [`stream`] adapts asynchronous streams.
//!
//! Most adapters are also available as methods through [`SequenceExt`].

mod ext;
pub use ext::*;

pub mod basic;
pub mod batch;
pub mod combine;
pub mod error;
pub mod multiplex;
pub mod push;
pub mod sampler;
pub mod select;
pub mod stream;
