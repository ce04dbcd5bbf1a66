use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::{Error, Result};
use crate::models::hardware::{Hardware, HardwareState};
use crate::services::user_service::{find_user, user_not_found};

#[derive(Clone)]
pub struct HardwareService {
    pool: SqlitePool,
}

/// Outcome of a successful return.
#[derive(Debug, Clone)]
pub struct ReturnedHardware {
    pub hardware: Hardware,
    pub returned_by: i64,
}

impl HardwareService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, available_only: bool) -> Result<Vec<Hardware>> {
        let items = sqlx::query_as::<_, Hardware>(
            r#"
            SELECT id, name, serial_number, signed_out_by
            FROM hardware
            WHERE (? = 0 OR signed_out_by IS NULL)
            ORDER BY id
            "#,
        )
        .bind(available_only)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn sign_out(&self, hardware_id: i64, user_id: i64) -> Result<Hardware> {
        let mut tx = self.pool.begin().await?;

        let signed_out = sqlx::query_as::<_, Hardware>(
            r#"
            UPDATE hardware
            SET signed_out_by = ?
            WHERE id = ?
              AND signed_out_by IS NULL
              AND EXISTS (SELECT 1 FROM users WHERE id = ?)
            RETURNING id, name, serial_number, signed_out_by
            "#,
        )
        .bind(user_id)
        .bind(hardware_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(item) = signed_out else {
            let item = find_hardware(&mut *tx, hardware_id)
                .await?
                .ok_or_else(|| hardware_not_found(hardware_id))?;
            if find_user(&mut *tx, user_id).await?.is_none() {
                return Err(user_not_found(user_id));
            }
            return Err(match item.state() {
                HardwareState::SignedOut { user_id: holder } => Error::Conflict(format!(
                    "Hardware {} is already signed out by user {}",
                    hardware_id, holder
                )),
                HardwareState::Available => Error::Internal(format!(
                    "Hardware {} could not be signed out",
                    hardware_id
                )),
            });
        };
        tx.commit().await?;

        tracing::info!(hardware_id, user_id, "hardware signed out");
        Ok(item)
    }

    pub async fn return_item(&self, hardware_id: i64) -> Result<ReturnedHardware> {
        let mut tx = self.pool.begin().await?;

        // A no-op write so the transaction holds the write lock before the row
        // is inspected.
        let locked = sqlx::query("UPDATE hardware SET name = name WHERE id = ?")
            .bind(hardware_id)
            .execute(&mut *tx)
            .await?;
        if locked.rows_affected() == 0 {
            return Err(hardware_not_found(hardware_id));
        }

        let item = find_hardware(&mut *tx, hardware_id)
            .await?
            .ok_or_else(|| hardware_not_found(hardware_id))?;
        let holder = match item.state() {
            HardwareState::SignedOut { user_id } => user_id,
            HardwareState::Available => {
                return Err(Error::Conflict(format!(
                    "Hardware {} is not signed out",
                    hardware_id
                )));
            }
        };
        if find_user(&mut *tx, holder).await?.is_none() {
            return Err(user_not_found(holder));
        }

        let item = sqlx::query_as::<_, Hardware>(
            r#"
            UPDATE hardware
            SET signed_out_by = NULL
            WHERE id = ?
            RETURNING id, name, serial_number, signed_out_by
            "#,
        )
        .bind(hardware_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::info!(hardware_id, user_id = holder, "hardware returned");
        Ok(ReturnedHardware {
            hardware: item,
            returned_by: holder,
        })
    }
}

fn hardware_not_found(id: i64) -> Error {
    Error::NotFound(format!("Hardware {} not found", id))
}

async fn find_hardware<'e, E>(executor: E, id: i64) -> Result<Option<Hardware>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let item = sqlx::query_as::<_, Hardware>(
        "SELECT id, name, serial_number, signed_out_by FROM hardware WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(item)
}

pub(crate) async fn held_by<'e, E>(executor: E, user_id: i64) -> Result<Vec<Hardware>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let items = sqlx::query_as::<_, Hardware>(
        r#"
        SELECT id, name, serial_number, signed_out_by
        FROM hardware
        WHERE signed_out_by = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await?;
    Ok(items)
}
