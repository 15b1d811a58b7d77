//! Environment variable credentials.

use super::{AwsCredentials, CredentialError};

/// Variable holding the access key ID.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

/// Variable holding the secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

pub(super) fn from_lookup<F>(lookup: F) -> Result<AwsCredentials, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    let access_key_id = required(&lookup, AWS_ACCESS_KEY_ID)?;
    let secret_access_key = required(&lookup, AWS_SECRET_ACCESS_KEY)?;

    Ok(AwsCredentials::new(access_key_id, secret_access_key))
}

fn required<F>(lookup: &F, variable: &'static str) -> Result<String, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(variable) {
        None => Err(CredentialError::NotSet { variable }),
        Some(value) if value.is_empty() => Err(CredentialError::Empty { variable }),
        Some(value) => Ok(value),
    }
}
