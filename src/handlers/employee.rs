use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use serde::Serialize;
use serde_json::json;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate, InsertResult};
use crate::utils::validation::validate_payload;

#[derive(Serialize)]
struct CreatedResponse {
    message: &'static str,
    data: InsertResult,
}

fn log_failure(action: &str, employee_id: &str, err: &AppError) {
    match err {
        AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
            error!("Error {} employee {}: {}", action, employee_id, err)
        }
        _ => warn!("Rejected {} employee {}: {}", action, employee_id, err),
    }
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    new_employee: web::Json<Employee>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*new_employee)?;

    let rows_affected = store.insert(&new_employee).await.map_err(|err| {
        log_failure("inserting", &new_employee.employee_id, &err);
        err
    })?;

    info!("Added employee {}", new_employee.employee_id);

    Ok(HttpResponse::Ok().json(CreatedResponse {
        message: "Employee added successfully",
        data: InsertResult { rows_affected },
    }))
}

pub async fn get_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = store.list().await.map_err(|err| {
        error!("Error retrieving employees: {}", err);
        err
    })?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    employee_id: web::Path<String>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*updates)?;

    let employee_id = employee_id.into_inner();

    let rows_affected = store.update(&employee_id, &updates).await.map_err(|err| {
        log_failure("updating", &employee_id, &err);
        err
    })?;

    if rows_affected == 0 {
        warn!("Update for unknown employee {}", employee_id);
        return Err(AppError::NotFound("Employee not found".to_string()).into());
    }

    info!("Updated employee {}", employee_id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully",
    })))
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = employee_id.into_inner();
    info!("Received DELETE request for employee {}", employee_id);

    let rows_affected = store.delete(&employee_id).await.map_err(|err| {
        log_failure("deleting", &employee_id, &err);
        err
    })?;

    if rows_affected == 0 {
        warn!("Delete for unknown employee {}", employee_id);
        return Err(AppError::NotFound("Employee not found".to_string()).into());
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryEmployeeStore as MemoryStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn ann() -> Employee {
        Employee {
            employee_name: "Ann".into(),
            employee_id: "E1".into(),
            email: "a@b.com".into(),
            phone_number: "1234567890".into(),
            department: "HR".into(),
            date_of_joining: "2020-01-01".into(),
            role: "Dev".into(),
        }
    }

    macro_rules! app {
        ($store:expr) => {{
            let store: Arc<dyn EmployeeStore> = $store;
            test::init_service(
                App::new()
                    .app_data(web::Data::from(store))
                    .configure(crate::routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn create_then_list_contains_record_once() {
        let app = app!(Arc::new(MemoryStore::default()));

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(ann())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Employee added successfully");
        assert_eq!(body["data"]["rowsAffected"], 1);

        let req = test::TestRequest::get().uri("/").to_request();
        let employees: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(employees, vec![ann()]);
    }

    #[actix_web::test]
    async fn list_uses_camel_case_keys() {
        let app = app!(Arc::new(MemoryStore::default()));
        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(ann())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["employeeId"], "E1");
        assert_eq!(body[0]["dateOfJoining"], "2020-01-01");
    }

    #[actix_web::test]
    async fn create_with_missing_field_is_bad_request() {
        let app = app!(Arc::new(MemoryStore::default()));
        let mut employee = ann();
        employee.role.clear();

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(serde_json::json!({ "employeeName": "Ann" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn overlong_employee_id_is_bad_request() {
        let app = app!(Arc::new(MemoryStore::default()));
        let mut employee = ann();
        employee.employee_id = "E1234567890".into();

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("cannot exceed 10 characters"));

        let req = test::TestRequest::get().uri("/").to_request();
        let employees: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        assert!(employees.is_empty());
    }

    #[actix_web::test]
    async fn malformed_json_is_bad_request() {
        let app = app!(Arc::new(MemoryStore::default()));
        let req = test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn duplicate_employee_id_is_conflict() {
        let app = app!(Arc::new(MemoryStore::default()));
        for expected in [StatusCode::OK, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/employees")
                .set_json(ann())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn update_changes_fields_but_not_employee_id() {
        let app = app!(Arc::new(MemoryStore::default()));
        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(ann())
            .to_request();
        test::call_service(&app, req).await;

        let mut changed = ann();
        changed.role = "Lead".into();
        changed.employee_id = "E2".into();
        let req = test::TestRequest::put()
            .uri("/api/employees/E1")
            .set_json(&changed)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Employee updated successfully");

        let req = test::TestRequest::get().uri("/").to_request();
        let employees: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].employee_id, "E1");
        assert_eq!(employees[0].role, "Lead");
    }

    #[actix_web::test]
    async fn update_unknown_id_is_not_found() {
        let app = app!(Arc::new(MemoryStore::default()));
        let req = test::TestRequest::put()
            .uri("/api/employees/E404")
            .set_json(EmployeeUpdate::from(&ann()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Employee not found");
    }

    #[actix_web::test]
    async fn update_with_missing_field_is_bad_request() {
        let app = app!(Arc::new(MemoryStore::default()));
        let mut changes = EmployeeUpdate::from(&ann());
        changes.email.clear();
        let req = test::TestRequest::put()
            .uri("/api/employees/E1")
            .set_json(changes)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_removes_record_and_then_reports_not_found() {
        let app = app!(Arc::new(MemoryStore::default()));
        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(ann())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/api/employees/E1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Employee deleted successfully");

        let req = test::TestRequest::get().uri("/").to_request();
        let employees: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
        assert!(employees.is_empty());

        let req = test::TestRequest::delete().uri("/api/employees/E1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn storage_failures_are_internal_errors() {
        let app = app!(Arc::new(MemoryStore::broken()));

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(ann())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::put()
            .uri("/api/employees/E1")
            .set_json(EmployeeUpdate::from(&ann()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::delete().uri("/api/employees/E1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
