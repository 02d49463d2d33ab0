//! This crate implements the scanner. It converts a complete source buffer into the ordered
//! sequence of classified tokens, stripping whitespace and comments along the way.
//!
//! The final output of this crate is a [`token_stream::TokenStream`], the materialized list of
//! tokens of a source file.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod config;
pub mod error;
pub mod token;
pub mod token_stream;
