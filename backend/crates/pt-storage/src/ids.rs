use uuid::Uuid;

/// Fresh project id. Uniqueness is left to UUID v4 and not checked.
pub fn generate_project_id() -> String {
    format!("p{}", Uuid::new_v4().simple())
}

pub fn generate_developer_id() -> String {
    format!("d{}", Uuid::new_v4().simple())
}
