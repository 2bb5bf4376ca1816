//! Sample rows for the demo table.

use gridform::{CellValue, TableRow};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub join_date: String,
}

impl User {
    fn new(id: i64, name: &str, email: &str, role: &str, status: &str, join_date: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status: status.to_string(),
            join_date: join_date.to_string(),
        }
    }

    /// Case-insensitive substring match on name or email.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}

impl TableRow for User {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.as_str().into(),
            "status" => self.status.as_str().into(),
            "join_date" => self.join_date.as_str().into(),
            _ => CellValue::Absent,
        }
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com", "Admin", "Active", "2024-01-15"),
        User::new(2, "Jane Smith", "jane@example.com", "User", "Active", "2024-02-20"),
        User::new(3, "Bob Johnson", "bob@example.com", "Manager", "Inactive", "2024-03-10"),
        User::new(4, "Alice Brown", "alice@example.com", "User", "Active", "2024-04-05"),
        User::new(5, "Charlie Wilson", "charlie@example.com", "Admin", "Active", "2024-05-12"),
    ]
}
