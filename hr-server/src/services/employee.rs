//! Employee Service
//!
//! Code uniqueness on add and update. Removal is unconditional.

use crate::db::repository::{RepoError, RepoResult, employee};
use chrono::NaiveDate;
use shared::models::{Employee, EmployeeCreate, EmployeeDetail};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct EmployeeService {
    pool: SqlitePool,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Listing view with ages computed for the current local date
    pub async fn get_all(&self) -> RepoResult<Vec<EmployeeDetail>> {
        self.get_all_on(chrono::Local::now().date_naive()).await
    }

    /// Listing view with ages computed as of `today`
    pub async fn get_all_on(&self, today: NaiveDate) -> RepoResult<Vec<EmployeeDetail>> {
        let rows = employee::find_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|(emp, department_name)| EmployeeDetail::new(emp, department_name, today))
            .collect())
    }

    pub async fn get_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        employee::find_by_id(&self.pool, id).await
    }

    pub async fn get_by_department(&self, department_id: i64) -> RepoResult<Vec<Employee>> {
        employee::find_by_department(&self.pool, department_id).await
    }

    /// Insert unless the code is taken. `Ok(None)` means conflict, nothing written.
    pub async fn add(&self, mut data: EmployeeCreate) -> RepoResult<Option<Employee>> {
        data.normalize();
        if employee::find_by_code(&self.pool, &data.emp_code)
            .await?
            .is_some()
        {
            tracing::debug!(emp_code = %data.emp_code, "Employee code already in use");
            return Ok(None);
        }

        match employee::create(&self.pool, data).await {
            Ok(created) => {
                tracing::info!(id = created.id, emp_code = %created.emp_code, "Employee created");
                Ok(Some(created))
            }
            // lost the race to a concurrent insert of the same code
            Err(RepoError::Duplicate(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Replace the record unless another employee holds its code.
    /// `Ok(None)` means conflict.
    pub async fn update(&self, mut data: Employee) -> RepoResult<Option<Employee>> {
        data.normalize();
        if employee::find_by_code_excluding(&self.pool, &data.emp_code, data.id)
            .await?
            .is_some()
        {
            tracing::debug!(id = data.id, emp_code = %data.emp_code, "Employee code held by another employee");
            return Ok(None);
        }

        match employee::update(&self.pool, data).await {
            Ok(updated) => {
                tracing::info!(id = updated.id, "Employee updated");
                Ok(Some(updated))
            }
            Err(RepoError::Duplicate(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn remove(&self, target: &Employee) -> RepoResult<bool> {
        employee::delete(&self.pool, target.id).await?;
        tracing::info!(id = target.id, emp_code = %target.emp_code, "Employee removed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;
    use crate::services::DepartmentService;
    use rust_decimal::Decimal;
    use shared::models::DepartmentCreate;

    async fn setup() -> (EmployeeService, i64) {
        let pool = test_pool().await;
        let dept = DepartmentService::new(pool.clone())
            .add(DepartmentCreate {
                department_name: "Engineering".into(),
            })
            .await
            .unwrap()
            .unwrap();
        (EmployeeService::new(pool), dept.id)
    }

    fn payload(code: &str, department_id: i64) -> EmployeeCreate {
        EmployeeCreate {
            emp_code: code.to_string(),
            emp_name: "Ann Lee".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1987, 7, 7).unwrap(),
            address: None,
            mobile: None,
            department_id,
            salary: Decimal::new(500_000, 2),
        }
    }

    #[tokio::test]
    async fn test_add_rejects_taken_code_without_writing() {
        let (service, dept) = setup().await;
        let first = service.add(payload("E001", dept)).await.unwrap();
        assert!(first.is_some());

        let mut dup = payload("E001", dept);
        dup.emp_name = "Someone Else".into();
        assert!(service.add(dup).await.unwrap().is_none());

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].emp_name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_add_rejects_padded_and_case_variants() {
        let (service, dept) = setup().await;
        service.add(payload("EMP-001", dept)).await.unwrap().unwrap();

        for variant in ["EMP-001 ", " EMP-001", "emp-001"] {
            assert!(
                service.add(payload(variant, dept)).await.unwrap().is_none(),
                "{variant:?} should collide"
            );
        }
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_stores_trimmed_code() {
        let (service, dept) = setup().await;
        let emp = service.add(payload(" E777 ", dept)).await.unwrap().unwrap();
        assert_eq!(emp.emp_code, "E777");
        assert!(service.add(payload("E777", dept)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_own_code() {
        let (service, dept) = setup().await;
        let mut emp = service.add(payload("E001", dept)).await.unwrap().unwrap();
        emp.emp_name = "Ann Lee-Park".into();

        let updated = service.update(emp.clone()).await.unwrap();
        assert_eq!(updated, Some(emp.clone()));
        assert_eq!(service.get_by_id(emp.id).await.unwrap(), Some(emp));
    }

    #[tokio::test]
    async fn test_update_rejects_code_of_other_employee() {
        let (service, dept) = setup().await;
        service.add(payload("E001", dept)).await.unwrap().unwrap();
        let mut second = service.add(payload("E002", dept)).await.unwrap().unwrap();

        second.emp_code = "E001".into();
        assert!(service.update(second.clone()).await.unwrap().is_none());

        let stored = service.get_by_id(second.id).await.unwrap().unwrap();
        assert_eq!(stored.emp_code, "E002");
    }

    #[tokio::test]
    async fn test_update_missing_employee_is_not_found() {
        let (service, dept) = setup().await;
        let ghost = Employee {
            id: 404,
            emp_code: "E404".into(),
            emp_name: "Nobody".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: None,
            mobile: None,
            department_id: dept,
            salary: Decimal::ZERO,
        };
        let err = service.update(ghost).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_is_unconditional() {
        let (service, dept) = setup().await;
        let emp = service.add(payload("E001", dept)).await.unwrap().unwrap();

        assert!(service.remove(&emp).await.unwrap());
        assert!(service.get_by_id(emp.id).await.unwrap().is_none());
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_reports_age_and_department() {
        let (service, dept) = setup().await;
        service.add(payload("E001", dept)).await.unwrap().unwrap();

        let before = NaiveDate::from_ymd_opt(2024, 7, 6).unwrap();
        let on = NaiveDate::from_ymd_opt(2024, 7, 7).unwrap();
        assert_eq!(service.get_all_on(before).await.unwrap()[0].age, 36);

        let listing = service.get_all_on(on).await.unwrap();
        assert_eq!(listing[0].age, 37);
        assert_eq!(listing[0].department_name.as_deref(), Some("Engineering"));
    }

    #[tokio::test]
    async fn test_get_all_empty_is_not_absent() {
        let (service, _) = setup().await;
        assert!(service.get_all().await.unwrap().is_empty());
        assert!(service.get_by_id(1).await.unwrap().is_none());
    }
}
