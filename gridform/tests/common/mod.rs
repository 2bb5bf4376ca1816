#![allow(dead_code)]

use gridform::{CellValue, TableRow};

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: Option<f64>,
}

impl Person {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            age: None,
        }
    }

    pub fn aged(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }
}

impl TableRow for Person {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "age" => self.age.into(),
            _ => CellValue::Absent,
        }
    }
}

/// Bob(1), Amy(2), Amy(3).
pub fn people() -> Vec<Person> {
    vec![
        Person::new(1, "Bob"),
        Person::new(2, "Amy"),
        Person::new(3, "Amy"),
    ]
}

pub fn ids(rows: &[&Person]) -> Vec<i64> {
    rows.iter().map(|p| p.id).collect()
}
