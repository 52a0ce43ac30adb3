//! Types shared between the logic thread and the presentation side.

pub mod observable;
pub mod snapshot;
