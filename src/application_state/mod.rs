//! # Application State
//!
//! Input-side collaborators of the engine. Turning raw device input into an aim is
//! outside the engine; this module only defines what the engine expects to receive.

pub mod pointer;
