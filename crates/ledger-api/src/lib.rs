//! Pre-generated gRPC bindings for the subset of the ledger API this
//! workspace consumes.
//!
//! The generated modules under `src/proto/` are committed so that building the
//! workspace does not require `protoc`. To regenerate after editing the
//! `.proto` sources in `proto/`, run `tonic_build` with
//! `out_dir("src/proto")` and `include_file("mod.rs")` over
//! `proto/ledger.proto` and `proto/admin.proto`.

mod proto;

pub use crate::proto::com::daml::ledger::api::v1;
