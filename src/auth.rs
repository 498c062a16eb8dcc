//! Implements the bearer token authentication flow on top of JSON Web Tokens.
//!
//! Tokens are issued at log-in and encode the user's ID as the subject claim.
//! Route handlers opt into authentication by taking a [Claims] argument,
//! which extracts and validates the `Authorization: Bearer` header.

use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{Error, models::UserID, state::AuthState};

/// The contents of a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The expiry time of the token.
    pub exp: usize,
    /// The time the token was issued.
    pub iat: usize,
    /// The ID of the user the token was issued to.
    pub sub: UserID,
}

impl<S> FromRequestParts<S> for Claims
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| Error::InvalidToken)?;

        let auth_state = AuthState::from_ref(state);

        let token_data = decode_token(bearer.token(), &auth_state.decoding_key)?;

        Ok(token_data.claims)
    }
}

/// The credentials sent by a client to register or log in.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// The name the user signs in with.
    pub username: Option<String>,
    /// The user's plaintext password.
    pub password: Option<String>,
}

impl Credentials {
    /// Check that both the username and the password are present and
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingCredentials] if either field is absent or empty.
    pub fn validate(self) -> Result<(String, String), Error> {
        match (self.username, self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok((username, password))
            }
            _ => Err(Error::MissingCredentials),
        }
    }
}

/// Create a signed bearer token that identifies `user_id`.
///
/// The token is valid for 15 minutes from the time it is issued.
///
/// # Errors
///
/// This function will return an error if the token could not be signed.
pub fn encode_token(user_id: UserID, encoding_key: &EncodingKey) -> Result<String, Error> {
    let now = Utc::now();
    let exp = (now + Duration::minutes(15)).timestamp() as usize;
    let iat = now.timestamp() as usize;
    let claims = Claims {
        exp,
        iat,
        sub: user_id,
    };

    encode(&Header::default(), &claims, encoding_key).map_err(|e| Error::TokenCreation(e.to_string()))
}

/// Decode and validate a bearer token.
///
/// # Errors
///
/// This function will return [Error::InvalidToken] if the token is malformed,
/// has an invalid signature, or has expired.
pub fn decode_token(token: &str, decoding_key: &DecodingKey) -> Result<TokenData<Claims>, Error> {
    decode(token, decoding_key, &Validation::default()).map_err(|_| Error::InvalidToken)
}


#[cfg(test)]
mod credentials_tests {
    use crate::Error;

    use super::Credentials;

    #[test]
    fn validate_succeeds_with_both_fields() {
        let credentials = Credentials {
            username: Some("testuser".to_owned()),
            password: Some("1234".to_owned()),
        };

        assert_eq!(
            credentials.validate(),
            Ok(("testuser".to_owned(), "1234".to_owned()))
        );
    }

    #[test]
    fn validate_fails_with_missing_password() {
        let credentials = Credentials {
            username: Some("testuser".to_owned()),
            password: None,
        };

        assert_eq!(credentials.validate(), Err(Error::MissingCredentials));
    }

    #[test]
    fn validate_fails_with_empty_username() {
        let credentials = Credentials {
            username: Some("".to_owned()),
            password: Some("1234".to_owned()),
        };

        assert_eq!(credentials.validate(), Err(Error::MissingCredentials));
    }
}
