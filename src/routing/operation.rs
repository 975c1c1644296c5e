//! Operation descriptors.
//!
//! Each supported route maps to exactly one upstream operation name and HTTP
//! method. The table is fixed at compile time and never mutated.

use axum::http::Method;

/// An upstream operation the relay knows how to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetSettings,
    GetStateInstance,
    SendMessage,
    SendFileByUrl,
}

impl Operation {
    /// Every supported operation, in route registration order.
    pub const ALL: [Operation; 4] = [
        Operation::GetSettings,
        Operation::GetStateInstance,
        Operation::SendMessage,
        Operation::SendFileByUrl,
    ];

    /// Upstream path segment naming the operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::GetSettings => "getSettings",
            Operation::GetStateInstance => "getStateInstance",
            Operation::SendMessage => "sendMessage",
            Operation::SendFileByUrl => "sendFileByUrl",
        }
    }

    /// Inbound route served by the relay.
    pub fn path(self) -> &'static str {
        match self {
            Operation::GetSettings => "/getSettings",
            Operation::GetStateInstance => "/getStateInstance",
            Operation::SendMessage => "/sendMessage",
            Operation::SendFileByUrl => "/sendFileByUrl",
        }
    }

    /// HTTP method used both inbound and upstream.
    pub fn method(self) -> Method {
        if self.accepts_body() {
            Method::POST
        } else {
            Method::GET
        }
    }

    /// True for operations that relay a caller-supplied JSON body.
    pub fn accepts_body(self) -> bool {
        matches!(self, Operation::SendMessage | Operation::SendFileByUrl)
    }

    /// Resolve an inbound path to its operation.
    pub fn from_path(path: &str) -> Option<Operation> {
        Self::ALL.into_iter().find(|op| op.path() == path)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
