//! LodeKV Protocol
//!
//! Request and response shapes for the raw API, independent of any wire
//! framing. Errors and key absence travel in response fields, never as
//! transport-level faults.

pub mod message;

pub use message::{
    KvPair, RawDeleteRequest, RawDeleteResponse, RawGetRequest, RawGetResponse, RawPutRequest,
    RawPutResponse, RawScanRequest, RawScanResponse,
};
