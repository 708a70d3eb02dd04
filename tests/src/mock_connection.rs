use crouton_core::{
    async_trait,
    driver::{Capability, Operation, Response, StorageTypes},
    schema::db,
    Connection, Error, Result,
};

use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// Capability of the mock database.
///
/// Every storage type is spelled with the neutral placeholder `type`, so
/// SQL recorded through a [`MockConnection`] is dialect-independent and
/// tests assert on structure rather than on one database's keywords.
pub static MOCK_CAPABILITY: Capability = Capability {
    storage_types: StorageTypes {
        boolean: "type",
        integer: "type",
        double: "type",
        text: "type",
    },
};

/// Canned behavior of a [`MockConnection`].
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Every operation succeeds with an empty response
    ReturnEmpty,

    /// Every operation fails with a transport error
    ReturnError,
}

/// A connection double that records every operation it is asked to execute
/// and answers with a canned response.
#[derive(Debug)]
pub struct MockConnection {
    behavior: Behavior,

    /// Log of all operations executed through this connection.
    /// `Arc<Mutex<_>>` so tests keep a handle after the connection moves
    /// into a `Db`.
    ops_log: Arc<Mutex<Vec<Operation>>>,
}

impl MockConnection {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to the operations log. Clone it out before handing the
    /// connection to a `Db`.
    pub fn ops_log_handle(&self) -> OpsLog {
        OpsLog {
            ops: self.ops_log.clone(),
        }
    }
}

#[async_trait]
impl Connection for MockConnection {
    fn capability(&self) -> &'static Capability {
        &MOCK_CAPABILITY
    }

    async fn exec(&self, _schema: &Arc<db::Schema>, op: Operation) -> Result<Response> {
        // Record first: by the time a real server rejects a statement, the
        // statement has already been generated and sent.
        self.ops_log.lock().unwrap().push(op);

        match self.behavior {
            Behavior::ReturnEmpty => Ok(Response::empty()),
            Behavior::ReturnError => Err(Error::driver_operation_failed(ConnectionRefused)),
        }
    }
}

/// The transport failure surfaced by [`Behavior::ReturnError`].
#[derive(Debug)]
struct ConnectionRefused;

impl std::error::Error for ConnectionRefused {}

impl fmt::Display for ConnectionRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection refused by server")
    }
}

/// Query API over the recorded operations.
pub struct OpsLog {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl OpsLog {
    /// Number of recorded operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// The last raw SQL string executed, if any
    pub fn raw(&self) -> Option<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|op| match op {
                Operation::ExecSql(op) => Some(op.sql.clone()),
                _ => None,
            })
    }

    /// All raw SQL strings, in execution order
    pub fn raw_all(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                Operation::ExecSql(op) => Some(op.sql.clone()),
                _ => None,
            })
            .collect()
    }

    /// The last operation executed, if any
    pub fn last(&self) -> Option<Operation> {
        self.ops.lock().unwrap().last().cloned()
    }
}
