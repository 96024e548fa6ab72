//! Department Repository

use super::{RepoError, RepoResult};
use shared::models::{Department, DepartmentCreate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Department>> {
    let departments = sqlx::query_as::<_, Department>(
        "SELECT id, department_name FROM department ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(departments)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Department>> {
    let department =
        sqlx::query_as::<_, Department>("SELECT id, department_name FROM department WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(department)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(
        "SELECT id, department_name FROM department WHERE department_name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

/// Same name held by a department other than `exclude_id`
pub async fn find_by_name_excluding(
    pool: &SqlitePool,
    name: &str,
    exclude_id: i64,
) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(
        "SELECT id, department_name FROM department WHERE department_name = ? AND id <> ? LIMIT 1",
    )
    .bind(name)
    .bind(exclude_id)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

pub async fn create(pool: &SqlitePool, data: DepartmentCreate) -> RepoResult<Department> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO department (department_name) VALUES (?) RETURNING id",
    )
    .bind(&data.department_name)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create department".into()))
}

pub async fn update(pool: &SqlitePool, data: Department) -> RepoResult<Department> {
    let rows = sqlx::query("UPDATE department SET department_name = ? WHERE id = ?")
        .bind(&data.department_name)
        .bind(data.id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Department {} not found", data.id)));
    }
    Ok(data)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM department WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    fn payload(name: &str) -> DepartmentCreate {
        DepartmentCreate {
            department_name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;

        let hr = create(&pool, payload("HR")).await.unwrap();
        let it = create(&pool, payload("IT")).await.unwrap();
        assert!(it.id > hr.id);

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all, vec![hr.clone(), it]);

        let found = find_by_name(&pool, "HR").await.unwrap();
        assert_eq!(found, Some(hr));
        assert!(find_by_id(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected_by_schema() {
        let pool = test_pool().await;
        create(&pool, payload("Sales")).await.unwrap();

        let err = create(&pool, payload("Sales")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_find_by_name_excluding_self() {
        let pool = test_pool().await;
        let sales = create(&pool, payload("Sales")).await.unwrap();

        let other = find_by_name_excluding(&pool, "Sales", sales.id).await.unwrap();
        assert!(other.is_none());
        let other = find_by_name_excluding(&pool, "Sales", sales.id + 1).await.unwrap();
        assert_eq!(other, Some(sales));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_pool().await;
        let err = update(
            &pool,
            Department {
                id: 42,
                department_name: "Ghost".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let dept = create(&pool, payload("Legal")).await.unwrap();

        assert!(delete(&pool, dept.id).await.unwrap());
        assert!(!delete(&pool, dept.id).await.unwrap());
        assert!(find_all(&pool).await.unwrap().is_empty());
    }
}
