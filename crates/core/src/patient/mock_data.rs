use super::requests::CreatePatientRequest;

/// Demo patients used to seed a fresh store.
pub fn demo_patients() -> Vec<CreatePatientRequest> {
    vec![
        CreatePatientRequest::new("Rayven Yor", 23, "Cebu Philippines"),
        CreatePatientRequest::new("David Landup", 27, "New York USA"),
        CreatePatientRequest::new("Jane Doe", 31, "New York USA"),
    ]
}
