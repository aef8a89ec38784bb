//! Shared test fixtures for the scan SDK integration tests.
//!
//! Provides [`RecordingTransport`], an in-memory [`Transport`] that serves canned
//! envelopes and records every request it sees, plus [`sdk_with`] to build an
//! SDK around it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use confluxscan_sdk::{Envelope, QueryParams, Result, ScanError, ScanSdk, Transport};
use serde_json::Value;

pub const ADDR_A: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const ADDR_B: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
pub const ADDR_C: &str = "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB";
pub const BAD_ADDR: &str = "0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

pub fn tx_hash() -> String {
    format!("0x{}", "3f".repeat(32))
}

/// One request seen by the transport.
#[derive(Debug, Clone)]
pub struct Call {
    pub endpoint: String,
    pub params: QueryParams,
}

/// Key a request is routed by: `module/action` for `/api`, otherwise the path.
pub fn route_key(endpoint: &str, params: &QueryParams) -> String {
    match (params.get("module"), params.get("action")) {
        (Some(m), Some(a)) => format!("{}/{}", m, a),
        _ => endpoint.to_string(),
    }
}

#[derive(Clone, Default)]
pub struct RecordingTransport {
    responses: Arc<Mutex<HashMap<String, Envelope>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `result` wrapped in a successful envelope for the given route.
    pub fn ok(self, route: &str, result: Value) -> Self {
        self.envelope(route, Envelope::ok(result))
    }

    pub fn envelope(self, route: &str, envelope: Envelope) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(route.to_string(), envelope);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no request was made")
    }
}

impl Transport for RecordingTransport {
    fn request(&self, endpoint: &str, params: &QueryParams) -> Result<Envelope> {
        self.calls.lock().unwrap().push(Call {
            endpoint: endpoint.to_string(),
            params: params.clone(),
        });
        let key = route_key(endpoint, params);
        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or(ScanError::Status {
                status: 404,
                body: format!("no canned response for {}", key),
            })
    }
}

/// Build an SDK whose requests go to `transport`.
pub fn sdk_with(transport: &RecordingTransport) -> ScanSdk {
    ScanSdk::builder()
        .transport(transport.clone())
        .build()
        .unwrap()
}
