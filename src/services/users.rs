use std::sync::Arc;

use serde_json::{Map, Value};

use crate::auth::password::{hash_password, verify_password};
use crate::database::{NewUser, User, UserStore};

use super::{ServiceError, ValidationError};

const REQUIRED_FIELDS: [&str; 2] = ["username", "password"];
const STRING_FIELDS: [&str; 4] = ["username", "password", "firstName", "lastName"];
const TRIMMED_FIELDS: [&str; 2] = ["username", "password"];

/// Length bounds in characters: (field, min, max)
const SIZED_FIELDS: [(&str, usize, Option<usize>); 2] = [
    ("username", 1, None),
    // bcrypt only looks at the first 72 bytes
    ("password", 10, Some(72)),
];

/// Signup body that passed field validation. The password is still raw.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl SignupForm {
    /// Validate an arbitrary JSON body; the first failing rule wins.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);

        if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
            return Err(ValidationError::new("Missing field", *missing));
        }

        if let Some(non_string) = STRING_FIELDS
            .iter()
            .find(|f| fields.get(**f).is_some_and(|v| !v.is_string()))
        {
            return Err(ValidationError::new(
                "Incorrect field type: expected string",
                *non_string,
            ));
        }

        let text = |field: &str| -> String {
            fields
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        if let Some(untrimmed) = TRIMMED_FIELDS.iter().find(|f| {
            let value = text(**f);
            value.trim() != value
        }) {
            return Err(ValidationError::new(
                "Cannot start or end with whitespace",
                *untrimmed,
            ));
        }

        for (field, min, max) in SIZED_FIELDS {
            let len = text(field).chars().count();
            if len < min {
                return Err(ValidationError::new(
                    format!("Must be at least {} characters long", min),
                    field,
                ));
            }
            if let Some(max) = max.filter(|max| len > *max) {
                return Err(ValidationError::new(
                    format!("Must be at most {} characters long", max),
                    field,
                ));
            }
        }

        Ok(Self {
            username: text("username"),
            password: text("password"),
            first_name: text("firstName").trim().to_string(),
            last_name: text("lastName").trim().to_string(),
        })
    }
}

/// User accounts: signup, lookup and credential checks.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Validate, hash and persist a signup body.
    pub async fn register(&self, body: &Value) -> Result<User, ServiceError> {
        let form = SignupForm::from_json(body)?;
        self.create(form).await
    }

    pub async fn create(&self, form: SignupForm) -> Result<User, ServiceError> {
        let password_hash = hash_password(form.password, self.bcrypt_cost).await?;
        let user = self
            .store
            .insert(NewUser {
                username: form.username,
                password_hash,
                first_name: form.first_name,
                last_name: form.last_name,
            })
            .await?;

        tracing::info!("Registered user '{}' ({})", user.username, user.id);
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.store.find_by_username(username).await?)
    }

    pub async fn validate_password(&self, user: &User, candidate: &str) -> Result<bool, ServiceError> {
        Ok(verify_password(candidate.to_string(), user.password_hash.clone()).await?)
    }

    /// Look up the user and check the password; `None` covers both failure cases.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, ServiceError> {
        let Some(user) = self.find_by_username(username).await? else {
            return Ok(None);
        };
        if self.validate_password(&user, password).await? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub async fn list_all(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.store.list().await?)
    }
}
