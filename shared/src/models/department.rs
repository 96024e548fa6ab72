//! Department Model

use serde::{Deserialize, Serialize};

use crate::util::trim_in_place;

/// Department entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub department_name: String,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreate {
    #[serde(default)]
    pub department_name: String,
}

/// Update department payload
///
/// Carries the id so the handler can reject a body that targets a
/// different record than the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    pub id: i64,
    #[serde(default)]
    pub department_name: String,
}

impl Department {
    /// Trim the name so padded variants compare equal
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.department_name);
    }
}

impl DepartmentCreate {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.department_name);
    }
}

impl DepartmentUpdate {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.department_name);
    }
}

impl From<DepartmentUpdate> for Department {
    fn from(update: DepartmentUpdate) -> Self {
        Self {
            id: update.id,
            department_name: update.department_name,
        }
    }
}
