//! Patient domain model ↔ shared DTO conversion.

use crate::domain::models::patient::Patient;

pub fn to_dto(patient: &Patient) -> shared::Patient {
    shared::Patient {
        id: patient.id.clone(),
        name: patient.name.clone(),
        address: patient.address.clone(),
        number: patient.number.clone(),
        gender: patient.gender.clone(),
        dob: patient.dob.format("%Y-%m-%d").to_string(),
        allergies: patient.allergies.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_dob_rendered_as_iso_date() {
        let patient = Patient {
            id: Patient::generate_id(),
            name: "Maria Santos".to_string(),
            address: "12 Mabini St".to_string(),
            number: "0917 555 0101".to_string(),
            gender: "Female".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 3, 7).unwrap(),
            allergies: "None".to_string(),
        };

        let dto = to_dto(&patient);
        assert_eq!(dto.dob, "1990-03-07");
        assert_eq!(dto.name, "Maria Santos");
    }
}
