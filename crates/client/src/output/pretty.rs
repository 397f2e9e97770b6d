//! Pretty output formatting.

use patient_records_core::patient::PatientRecord;

/// Format a patient record for display.
pub fn format_patient(patient: &PatientRecord) -> String {
    let id = patient
        .patient_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}\n  ID: {}\n  Age: {}\n  Address: {}",
        patient.name, id, patient.age, patient.address
    )
}

/// Format patient records for display.
pub fn format_patients(patients: &[PatientRecord]) -> String {
    if patients.is_empty() {
        return "No patients found.".to_string();
    }
    let mut output = format!("PATIENTS ({})\n", patients.len());
    output.push_str(&"-".repeat(40));
    for patient in patients {
        output.push_str(&format!("\n{}", format_patient(patient)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_patient() {
        let patient = PatientRecord::new("Rayven Yor", 23, "Cebu Philippines").with_id(1);

        assert_eq!(
            format_patient(&patient),
            "Rayven Yor\n  ID: 1\n  Age: 23\n  Address: Cebu Philippines"
        );
    }

    #[test]
    fn test_format_patients_empty() {
        assert_eq!(format_patients(&[]), "No patients found.");
    }

    #[test]
    fn test_format_patients_header_counts_records() {
        let patients = vec![
            PatientRecord::new("Rayven Yor", 23, "Cebu Philippines").with_id(1),
            PatientRecord::new("David Landup", 27, "New York USA").with_id(2),
        ];

        let output = format_patients(&patients);

        assert!(output.starts_with("PATIENTS (2)\n"));
        assert!(output.contains("David Landup\n  ID: 2"));
    }
}
