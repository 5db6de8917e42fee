//! Prospect repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and filtered/sorted listing over `prospects` storage.
//! - Keep SQL details inside core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Prospect::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Listing order matches `SortKey::compare` exactly (BINARY collation on
//!   `name`, hyphenated lowercase UUID text for the tiebreak).

use crate::db::DbError;
use crate::model::prospect::{Prospect, ProspectId, ProspectValidationError};
use crate::query::view::{ProspectFilter, SortKey};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PROSPECT_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    email_address,
    is_contacted,
    date_added
FROM prospects";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for prospect persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ProspectValidationError),
    Db(DbError),
    NotFound(ProspectId),
    Conflict(ProspectId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "prospect not found: {id}"),
            Self::Conflict(id) => write!(f, "prospect already exists: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted prospect data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::Conflict(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ProspectValidationError> for RepoError {
    fn from(value: ProspectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing prospects.
///
/// `sort = None` leaves order unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProspectListQuery {
    pub filter: ProspectFilter,
    pub sort: Option<SortKey>,
}

impl ProspectListQuery {
    pub fn sorted(filter: ProspectFilter, sort: SortKey) -> Self {
        Self {
            filter,
            sort: Some(sort),
        }
    }
}

/// Persistence contract for prospect records keyed by `id`.
pub trait ProspectRepository {
    /// Inserts a new record; fails with `Conflict` when the id already exists.
    fn insert_prospect(&mut self, prospect: &Prospect) -> RepoResult<ProspectId>;
    /// Replaces the mutable fields of an existing record.
    fn update_prospect(&mut self, prospect: &Prospect) -> RepoResult<()>;
    fn get_prospect(&self, id: ProspectId) -> RepoResult<Option<Prospect>>;
    fn list_prospects(&self, query: &ProspectListQuery) -> RepoResult<Vec<Prospect>>;
    /// Hard-deletes one record. Returns whether a row was removed.
    fn delete_prospect(&mut self, id: ProspectId) -> RepoResult<bool>;
    /// Hard-deletes every present id, ignoring absent ones. Returns removed count.
    fn delete_prospects(&mut self, ids: &[ProspectId]) -> RepoResult<usize>;
    fn count_prospects(&self) -> RepoResult<usize>;
}

/// SQLite-backed prospect repository.
///
/// Owns its connection so a store built on it can move across threads.
pub struct SqliteProspectRepository {
    conn: Connection,
}

impl SqliteProspectRepository {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ProspectRepository for SqliteProspectRepository {
    fn insert_prospect(&mut self, prospect: &Prospect) -> RepoResult<ProspectId> {
        prospect.validate()?;

        let result = self.conn.execute(
            "INSERT INTO prospects (
                uuid,
                name,
                email_address,
                is_contacted,
                date_added
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                prospect.id.to_string(),
                prospect.name.as_str(),
                prospect.email_address.as_str(),
                bool_to_int(prospect.is_contacted),
                prospect.date_added,
            ],
        );

        match result {
            Ok(_) => Ok(prospect.id),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                Err(RepoError::Conflict(prospect.id))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn update_prospect(&mut self, prospect: &Prospect) -> RepoResult<()> {
        prospect.validate()?;

        let changed = self.conn.execute(
            "UPDATE prospects
             SET
                name = ?1,
                email_address = ?2,
                is_contacted = ?3
             WHERE uuid = ?4;",
            params![
                prospect.name.as_str(),
                prospect.email_address.as_str(),
                bool_to_int(prospect.is_contacted),
                prospect.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(prospect.id));
        }

        Ok(())
    }

    fn get_prospect(&self, id: ProspectId) -> RepoResult<Option<Prospect>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROSPECT_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_prospect_row(row)?));
        }

        Ok(None)
    }

    fn list_prospects(&self, query: &ProspectListQuery) -> RepoResult<Vec<Prospect>> {
        let mut sql = format!("{PROSPECT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(is_contacted) = query.filter.contacted_predicate() {
            sql.push_str(" AND is_contacted = ?");
            bind_values.push(Value::Integer(bool_to_int(is_contacted)));
        }

        match query.sort {
            Some(SortKey::Name) => sql.push_str(" ORDER BY name ASC, uuid ASC"),
            Some(SortKey::DateAdded) => sql.push_str(" ORDER BY date_added ASC, uuid ASC"),
            None => {}
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut prospects = Vec::new();

        while let Some(row) = rows.next()? {
            prospects.push(parse_prospect_row(row)?);
        }

        Ok(prospects)
    }

    fn delete_prospect(&mut self, id: ProspectId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM prospects WHERE uuid = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }

    fn delete_prospects(&mut self, ids: &[ProspectId]) -> RepoResult<usize> {
        let tx = self.conn.transaction()?;
        let mut removed = 0;
        {
            let mut stmt = tx.prepare("DELETE FROM prospects WHERE uuid = ?1;")?;
            for id in ids {
                removed += stmt.execute([id.to_string()])?;
            }
        }
        tx.commit()?;
        Ok(removed)
    }

    fn count_prospects(&self) -> RepoResult<usize> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM prospects;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative prospect count `{count}`")))
    }
}

fn parse_prospect_row(row: &Row<'_>) -> RepoResult<Prospect> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in prospects.uuid"))
    })?;

    let is_contacted = match row.get::<_, i64>("is_contacted")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_contacted value `{other}` in prospects.is_contacted"
            )));
        }
    };

    let prospect = Prospect {
        id,
        name: row.get("name")?,
        email_address: row.get("email_address")?,
        is_contacted,
        date_added: row.get("date_added")?,
    };
    prospect.validate()?;
    Ok(prospect)
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}
