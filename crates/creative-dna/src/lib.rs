//! Creative DNA Test: a personality quiz whose answers accumulate weighted
//! category points and resolve, deterministically, to one of six creative
//! profiles. The quiz module carries the engine; config, telemetry, and error
//! plumbing support the HTTP service built on top.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
