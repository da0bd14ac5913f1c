//! [`ActorEntity`] implementation for [`User`].

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;

fn validate(name: &str, email: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::ValidationError("name must not be empty".into()));
    }
    if !email.contains('@') {
        return Err(UserError::ValidationError(format!("invalid email: {email}")));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        validate(&params.name, &params.email)?;
        Ok(Self::new(id, params.name, params.email))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_name_and_bad_email() {
        let blank = UserCreate {
            name: "  ".into(),
            email: "a@b.c".into(),
        };
        assert!(matches!(
            User::from_create_params(UserId(1), blank),
            Err(UserError::ValidationError(_))
        ));

        let bad_email = UserCreate {
            name: "Ana".into(),
            email: "ana.example.com".into(),
        };
        assert!(matches!(
            User::from_create_params(UserId(1), bad_email),
            Err(UserError::ValidationError(_))
        ));
    }
}
