//! Mentee reference-data queries.

use log::warn;
use rusqlite::params;

use crate::error::{Result, StoreResultExt};
use crate::models::{Mentee, Phase};

const SELECT_MENTEES_SQL: &str =
    "SELECT nome, fase_jornada, risco_churn FROM mentees ORDER BY nome";
const UPSERT_MENTEE_SQL: &str = "INSERT INTO mentees (nome, fase_jornada, risco_churn) \
     VALUES (?1, ?2, ?3) \
     ON CONFLICT(nome) DO UPDATE SET fase_jornada = ?2, risco_churn = ?3";

impl super::Store {
    /// Lists all mentees ordered by name. Rows with an unrecognized phase
    /// degrade to the conception phase.
    pub fn list_mentees(&self) -> Result<Vec<Mentee>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_MENTEES_SQL)
            .store_context("Failed to prepare mentee query")?;
        let mentees = stmt
            .query_map([], |row| {
                let name: String = row.get(0)?;
                let phase = row
                    .get::<_, String>(1)?
                    .parse::<Phase>()
                    .unwrap_or_else(|e| {
                        warn!("mentee {name}: {e}; defaulting to concepcao");
                        Phase::Concepcao
                    });
                Ok(Mentee {
                    name,
                    phase,
                    churn_risk: row.get(2)?,
                })
            })
            .store_context("Failed to query mentees")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .store_context("Failed to fetch mentees")?;
        Ok(mentees)
    }

    /// Inserts or updates a mentee record.
    pub fn upsert_mentee(&mut self, mentee: &Mentee) -> Result<()> {
        self.connection
            .execute(
                UPSERT_MENTEE_SQL,
                params![mentee.name, mentee.phase.as_str(), mentee.churn_risk],
            )
            .store_context("Failed to upsert mentee")?;
        Ok(())
    }
}
