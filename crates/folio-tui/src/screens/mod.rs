#![forbid(unsafe_code)]

//! Page views.
//!
//! Each page is a pure function of its state into a [`Frame`](crate::frame::Frame)
//! region; the app model decides which one to call.

pub mod contact;
pub mod contest;
