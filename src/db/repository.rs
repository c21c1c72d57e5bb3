//! Database repository for site content operations.
//!
//! Uses prepared statements for all queries. The content proxy only reads
//! through this type; writes come from the admin portal and the public
//! contact form.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    ContactMessage, CreateContactRequest, CreateServiceRequest, CreateTreatmentRequest, Service,
    Settings, Treatment, UpdateSettingsRequest,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== SERVICE OPERATIONS ====================

    /// List all services, oldest first.
    pub async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        let rows =
            sqlx::query("SELECT id, name, image, created_at FROM services ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.iter().map(service_from_row).collect())
    }

    /// Create a new service.
    pub async fn create_service(
        &self,
        request: &CreateServiceRequest,
    ) -> Result<Service, AppError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query("INSERT INTO services (name, image, created_at) VALUES (?, ?, ?)")
            .bind(&request.name)
            .bind(&request.image)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Service {
            id: result.last_insert_rowid(),
            name: request.name.clone(),
            image: request.image.clone(),
            created_at: now,
        })
    }

    /// Delete a service.
    pub async fn delete_service(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service {} not found", id)));
        }

        Ok(())
    }

    // ==================== TREATMENT OPERATIONS ====================

    /// List all treatments, oldest first.
    pub async fn list_treatments(&self) -> Result<Vec<Treatment>, AppError> {
        let rows = sqlx::query("SELECT id, name, created_at FROM treatments ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(treatment_from_row).collect())
    }

    /// Create a new treatment.
    pub async fn create_treatment(
        &self,
        request: &CreateTreatmentRequest,
    ) -> Result<Treatment, AppError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query("INSERT INTO treatments (name, created_at) VALUES (?, ?)")
            .bind(&request.name)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Treatment {
            id: result.last_insert_rowid(),
            name: request.name.clone(),
            created_at: now,
        })
    }

    /// Delete a treatment.
    pub async fn delete_treatment(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM treatments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Treatment {} not found", id)));
        }

        Ok(())
    }

    // ==================== CONTACT MESSAGE OPERATIONS ====================

    /// List all contact messages, newest first.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, phone, message, read, created_at FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(message_from_row).collect())
    }

    /// Store a submitted contact message as unread.
    pub async fn create_message(
        &self,
        request: &CreateContactRequest,
    ) -> Result<ContactMessage, AppError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO contact_messages (name, email, phone, message, read, created_at) VALUES (?, ?, ?, ?, 0, ?)",
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.message)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ContactMessage {
            id: result.last_insert_rowid(),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            message: request.message.clone(),
            read: false,
            created_at: now,
        })
    }

    /// Mark a contact message as read.
    pub async fn mark_message_read(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE contact_messages SET read = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Message {} not found", id)));
        }

        Ok(())
    }

    /// Delete a contact message.
    pub async fn delete_message(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Message {} not found", id)));
        }

        Ok(())
    }

    // ==================== SETTINGS OPERATIONS ====================

    /// Get the settings singleton, if present.
    pub async fn get_settings(&self) -> Result<Option<Settings>, AppError> {
        let row = sqlx::query(
            "SELECT id, hospital_name, contact_phone, contact_email, contact_address, working_hours FROM settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(settings_from_row))
    }

    /// Update the settings singleton.
    pub async fn update_settings(
        &self,
        request: &UpdateSettingsRequest,
    ) -> Result<Settings, AppError> {
        let result = sqlx::query(
            "UPDATE settings SET hospital_name = ?, contact_phone = ?, contact_email = ?, contact_address = ?, working_hours = ? WHERE id = 1",
        )
        .bind(&request.hospital_name)
        .bind(&request.contact_phone)
        .bind(&request.contact_email)
        .bind(&request.contact_address)
        .bind(&request.working_hours)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Settings not found".to_string()));
        }

        Ok(Settings {
            id: 1,
            hospital_name: request.hospital_name.clone(),
            contact_phone: request.contact_phone.clone(),
            contact_email: request.contact_email.clone(),
            contact_address: request.contact_address.clone(),
            working_hours: request.working_hours.clone(),
        })
    }
}

// Helper functions for row conversion

fn service_from_row(row: &sqlx::sqlite::SqliteRow) -> Service {
    Service {
        id: row.get("id"),
        name: row.get("name"),
        image: row.get("image"),
        created_at: row.get("created_at"),
    }
}

fn treatment_from_row(row: &sqlx::sqlite::SqliteRow) -> Treatment {
    Treatment {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

fn message_from_row(row: &sqlx::sqlite::SqliteRow) -> ContactMessage {
    let read: i32 = row.get("read");
    ContactMessage {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        message: row.get("message"),
        read: read != 0,
        created_at: row.get("created_at"),
    }
}

fn settings_from_row(row: &sqlx::sqlite::SqliteRow) -> Settings {
    Settings {
        id: row.get("id"),
        hospital_name: row.get("hospital_name"),
        contact_phone: row.get("contact_phone"),
        contact_email: row.get("contact_email"),
        contact_address: row.get("contact_address"),
        working_hours: row.get("working_hours"),
    }
}
