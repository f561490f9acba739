use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i32, pub name: String, pub email: String, pub age: i32 }

#[derive(ToSchema)]
pub struct CustomerRegistrationDoc { pub name: String, pub email: String, pub age: i32 }

#[derive(ToSchema)]
pub struct CustomerUpdateDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub path: String, pub message: String, pub status_code: u16, pub timestamp: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::register,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CustomerRegistrationDoc,
            CustomerUpdateDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_customer_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/customers"));
        assert!(doc.paths.paths.contains_key("/api/v1/customers/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
