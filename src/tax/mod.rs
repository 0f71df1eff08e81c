//! Tax computation for invoices

pub mod gst;

pub use gst::*;
