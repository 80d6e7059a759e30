use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Success envelope for API responses.
///
/// The payload is always a plain value produced by `plain::to_plain`, so
/// nothing but primitives, sequences and string-keyed maps crosses to the
/// client. Timestamp fields arrive in the fixed millisecond UTC form
/// because entity types render them through `plain::timestamp`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse {
    #[schema(value_type = Object)]
    pub data: Value,
}

impl DataResponse {
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}
