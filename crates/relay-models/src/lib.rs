//! Core data models for Status Relay.
//!
//! This crate provides the types shared by every other crate in the
//! workspace: the externally written service status record, the store
//! connection state, and the platform-neutral payloads rendered from them.

pub mod connection;
pub mod payload;
pub mod status;

// Re-export main types
pub use connection::ConnectionState;
pub use payload::{
    render_status_payload, render_status_report, PayloadField, StatusPayload, StatusReport,
    COLOR_OFFLINE, COLOR_ONLINE, PAYLOAD_TITLE, REPORT_TITLE,
};
pub use status::{default_message, ServiceStatus, DEFAULT_OFFLINE_MESSAGE, DEFAULT_ONLINE_MESSAGE};
