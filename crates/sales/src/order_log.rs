//! Append-only log of placed orders.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use thiserror::Error;

use crate::order::Order;

#[derive(Debug, Error)]
pub enum OrderLogError {
    #[error("order log io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("order log is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("order log lock poisoned")]
    Poisoned,
}

/// Where placed orders are recorded.
pub trait OrderLog: Send + Sync {
    fn append(&self, order: Order) -> Result<(), OrderLogError>;

    /// All orders, oldest first.
    fn list(&self) -> Result<Vec<Order>, OrderLogError>;
}

#[derive(Debug, Default)]
pub struct InMemoryOrderLog {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderLog for InMemoryOrderLog {
    fn append(&self, order: Order) -> Result<(), OrderLogError> {
        let mut orders = self.orders.write().map_err(|_| OrderLogError::Poisoned)?;
        orders.push(order);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Order>, OrderLogError> {
        let orders = self.orders.read().map_err(|_| OrderLogError::Poisoned)?;
        Ok(orders.clone())
    }
}

/// JSON array of orders in a single file. A missing or empty file is an empty log.
#[derive(Debug)]
pub struct JsonFileOrderLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileOrderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Order>, OrderLogError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write to a sibling temp file, then rename it over the log so a crash
    /// mid-write leaves the previous log intact.
    fn write_orders(&self, orders: &[Order]) -> Result<(), OrderLogError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, orders)?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl OrderLog for JsonFileOrderLog {
    fn append(&self, order: Order) -> Result<(), OrderLogError> {
        let _guard = self.write_lock.lock().map_err(|_| OrderLogError::Poisoned)?;

        let mut orders = self.read_all()?;
        let order_id = order.id;
        orders.push(order);

        self.write_orders(&orders)?;

        tracing::info!(
            order_id = %order_id,
            orders = orders.len(),
            path = %self.path.display(),
            "order appended to log"
        );
        Ok(())
    }

    fn list(&self) -> Result<Vec<Order>, OrderLogError> {
        let _guard = self.write_lock.lock().map_err(|_| OrderLogError::Poisoned)?;
        self.read_all()
    }
}
