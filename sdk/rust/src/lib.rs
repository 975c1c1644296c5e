//! Client SDK for the Green API relay.

pub mod client;

pub use client::{
    RelayClient, RelayEnvelope, SdkError, SendFileByUrlRequest, SendMessageRequest,
};
