use serde::Serialize;

/// Login payload, sent as the `login_data` body of the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload, sent as the `register_data` body of the register
/// endpoint. The password/confirmation equality check happens in the form,
/// before this type is ever built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub company_id: u64,
    pub password: String,
}
