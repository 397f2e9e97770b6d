//! Patient CLI commands.

use clap::{Parser, Subcommand};
use patient_records_core::patient::PatientId;

/// Patient record management commands.
#[derive(Debug, Parser)]
pub struct PatientsCommand {
    #[command(subcommand)]
    pub action: PatientsAction,
}

/// Available patient actions.
#[derive(Debug, Subcommand)]
pub enum PatientsAction {
    /// List all patient records.
    List,
    /// Get a patient record by ID.
    Get {
        /// Patient ID.
        id: PatientId,
    },
    /// Create a new patient record.
    Create {
        /// Patient name.
        #[arg(long)]
        name: String,
        /// Patient age.
        #[arg(long)]
        age: i32,
        /// Patient address.
        #[arg(long)]
        address: String,
    },
    /// Replace name, age and address of an existing record.
    Update {
        /// Patient ID.
        id: PatientId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        address: String,
    },
    /// Delete a patient record by ID.
    Delete {
        /// Patient ID.
        id: PatientId,
    },
}
