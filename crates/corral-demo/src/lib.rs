//! corral-demo
//!
//! Console helpers shared by the demo binaries.

pub mod console;
