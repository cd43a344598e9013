//! User and subaccount bodies.

use serde::Serialize;

use super::Payload;

/// Body for `POST /users`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateUser {
    email: String,
    name: String,
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    acls: Option<Vec<String>>,
}

impl CreateUser {
    /// Starts a user with login details.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
            api_enabled: None,
            acls: None,
        }
    }
}

optional_setters!(CreateUser {
    /// Grants API access.
    api_enabled: bool,
});

list_setters!(CreateUser {
    /// Permission names, for example `manage_servers`.
    acls,
});

impl Payload for CreateUser {}

/// Body for `PATCH /users/{user-id}`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    acls: Option<Vec<String>>,
}

impl UpdateUser {
    /// Starts an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

optional_setters!(UpdateUser {
    /// New email address.
    email: String,
    /// New display name.
    name: String,
    /// New password.
    password: String,
    /// Grants or revokes API access.
    api_enabled: bool,
});

list_setters!(UpdateUser {
    /// Replaces the permission set.
    acls,
});

impl Payload for UpdateUser {}

/// Body for `POST /subaccounts`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateSubaccount {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subaccount_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subaccount_id: Option<String>,
}

impl CreateSubaccount {
    /// Starts a subaccount owned by `email`.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            subaccount_name: None,
            subaccount_id: None,
        }
    }
}

optional_setters!(CreateSubaccount {
    /// Display name.
    subaccount_name: String,
    /// Caller-chosen external id.
    subaccount_id: String,
});

impl Payload for CreateSubaccount {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Map, Value, json};

    #[test]
    fn user_acls_are_a_list() {
        let body = CreateUser::new("ops@example.com", "Ops", "hunter22")
            .acls(["manage_servers", "billing"])
            .to_json();
        assert_eq!(
            serde_json::Value::Object(body),
            json!({
                "email": "ops@example.com",
                "name": "Ops",
                "password": "hunter22",
                "acls": ["manage_servers", "billing"],
            })
        );
    }

    #[rstest]
    #[case(
        CreateUser::new("ops@example.com", "Ops", "hunter22").to_json(),
        json!({"email": "ops@example.com", "name": "Ops", "password": "hunter22"})
    )]
    #[case(
        CreateUser::new("ops@example.com", "Ops", "hunter22").api_enabled(false).to_json(),
        json!({
            "email": "ops@example.com",
            "name": "Ops",
            "password": "hunter22",
            "api_enabled": false,
        })
    )]
    #[case(UpdateUser::new().to_json(), json!({}))]
    #[case(
        UpdateUser::new().name("Operations").api_enabled(true).acls(["support"]).to_json(),
        json!({"name": "Operations", "api_enabled": true, "acls": ["support"]})
    )]
    #[case(
        UpdateUser::new().email("new@example.com").password("s3cret!!").to_json(),
        json!({"email": "new@example.com", "password": "s3cret!!"})
    )]
    #[case(
        CreateSubaccount::new("team@example.com").to_json(),
        json!({"email": "team@example.com"})
    )]
    #[case(
        CreateSubaccount::new("team@example.com")
            .subaccount_name("Team")
            .subaccount_id("ext-42")
            .to_json(),
        json!({"email": "team@example.com", "subaccount_name": "Team", "subaccount_id": "ext-42"})
    )]
    fn bodies_carry_only_set_fields(#[case] body: Map<String, Value>, #[case] expected: Value) {
        assert_eq!(Value::Object(body), expected);
    }
}
