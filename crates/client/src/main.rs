//! patient-records-client CLI entry point.

use clap::Parser;
use patient_records_client::cli::{Cli, Commands, OutputFormat};
use patient_records_client::client::PatientRecordsClient;
use patient_records_client::output::{format_patient, format_patients};
use patient_records_core::patient::{CreatePatientRequest, UpdatePatientRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = PatientRecordsClient::new(&cli.base_url);

    match cli.command {
        Commands::Patients(patients_cmd) => {
            use patient_records_client::cli::patients::PatientsAction;
            match patients_cmd.action {
                PatientsAction::List => {
                    let patients = client.list_patients().await?;
                    println!("{}", format_patients(&patients, cli.format)?);
                }
                PatientsAction::Get { id } => {
                    let patient = client.get_patient(id).await?;
                    println!("{}", format_patient(&patient, cli.format)?);
                }
                PatientsAction::Create { name, age, address } => {
                    let patient = client
                        .create_patient(&CreatePatientRequest::new(name, age, address))
                        .await?;
                    let output = format_patient(&patient, cli.format)?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", output),
                        OutputFormat::Pretty => println!("Created:\n{}", output),
                    }
                }
                PatientsAction::Update {
                    id,
                    name,
                    age,
                    address,
                } => {
                    let patient = client
                        .update_patient(&UpdatePatientRequest::new(id, name, age, address))
                        .await?;
                    let output = format_patient(&patient, cli.format)?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", output),
                        OutputFormat::Pretty => println!("Updated:\n{}", output),
                    }
                }
                PatientsAction::Delete { id } => {
                    client.delete_patient(id).await?;
                    if !cli.quiet {
                        println!("Deleted patient {}", id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use patient_records_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Livez => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("OK");
                    }
                }
            }
        }
    }

    Ok(())
}
