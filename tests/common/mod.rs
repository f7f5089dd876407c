// Shared helpers for the integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use pos_db::SchemaAdmin;
use pos_models::{DatabaseName, PosError, Result, MIGRATION_FILE_NAME};

/// Writes `contents` to `migration.sql` inside a fresh temp dir.
pub fn write_migration(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(MIGRATION_FILE_NAME);
    std::fs::write(&path, contents).expect("write migration");
    (dir, path)
}

/// Stand-in for a MySQL server: a set of schema names, the statements it
/// received, and a count of sessions that were closed.
#[derive(Clone, Default)]
pub struct InMemoryServer {
    databases: Arc<Mutex<HashSet<String>>>,
    statements: Arc<Mutex<Vec<String>>>,
    closed_sessions: Arc<Mutex<usize>>,
    reject_create: Option<String>,
}

impl InMemoryServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_create(reason: &str) -> Self {
        Self {
            reject_create: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn session(&self) -> InMemorySession {
        InMemorySession {
            server: self.clone(),
        }
    }

    pub fn databases(&self) -> Vec<String> {
        let mut names: Vec<String> = self.databases.lock().unwrap().iter().cloned().collect();
        names.sort();
        names
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn closed_sessions(&self) -> usize {
        *self.closed_sessions.lock().unwrap()
    }
}

pub struct InMemorySession {
    server: InMemoryServer,
}

impl SchemaAdmin for InMemorySession {
    async fn create_database(&mut self, name: &DatabaseName) -> Result<()> {
        self.server
            .statements
            .lock()
            .unwrap()
            .push(pos_db::create_database_sql(name));
        if let Some(reason) = &self.server.reject_create {
            return Err(PosError::Database(sqlx::Error::Protocol(reason.clone())));
        }
        self.server
            .databases
            .lock()
            .unwrap()
            .insert(name.as_str().to_string());
        Ok(())
    }

    async fn close(self) -> Result<()> {
        *self.server.closed_sessions.lock().unwrap() += 1;
        Ok(())
    }
}
