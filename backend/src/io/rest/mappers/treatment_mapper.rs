//! Treatment domain model → shared DTO conversion.

use crate::domain::models::treatment::Treatment;

pub fn to_dto(treatment: &Treatment) -> shared::Treatment {
    shared::Treatment {
        id: treatment.id.clone(),
        name: treatment.name.clone(),
    }
}
