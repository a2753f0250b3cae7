use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::FieldViolation)
    ),
    info(
        title = "Users API",
        version = "0.1.0",
        description = "CRUD API for user records"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_users::entity::Model::URL, api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_paths_are_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/user"));
        assert!(paths.iter().any(|p| p.as_str() == "/user/{id}"));
    }

    #[test]
    fn test_every_user_operation_has_a_summary() {
        let doc = ApiDoc::openapi();

        for (path, item) in &doc.paths.paths {
            let operations = [&item.get, &item.post, &item.patch, &item.delete];
            for operation in operations.into_iter().flatten() {
                assert!(
                    operation.summary.as_deref().is_some_and(|s| !s.is_empty()),
                    "{path} has an undocumented operation"
                );
            }
        }

        let by_id = &doc.paths.paths["/user/{id}"];
        let get = by_id.get.as_ref().unwrap();
        let delete = by_id.delete.as_ref().unwrap();
        assert_eq!(get.summary.as_deref(), Some("Fetch one user by id"));
        assert_eq!(
            delete.summary.as_deref(),
            Some("Delete a user; responds with an empty body")
        );
    }
}
