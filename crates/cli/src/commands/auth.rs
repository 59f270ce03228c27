//! Account commands.

use vikoshiya_storefront::error::AppError;
use vikoshiya_storefront::services::auth::AuthRegistry;

use super::{CommandError, Context};

/// Register a new account and sign in.
pub fn register(name: &str, email: &str, password: &str) -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let registry = AuthRegistry::new(ctx.storage);

    let account = registry
        .register(name, email, password)
        .map_err(AppError::from)?;
    tracing::info!("Registered and signed in as {} <{}>", account.name, account.email);
    Ok(())
}

/// Sign in to an existing account.
pub fn login(email: &str, password: &str) -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let registry = AuthRegistry::new(ctx.storage);

    let account = registry.login(email, password).map_err(AppError::from)?;
    tracing::info!("Signed in as {} <{}>", account.name, account.email);
    Ok(())
}

/// End the current session.
pub fn logout() -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let registry = AuthRegistry::new(ctx.storage);

    registry.logout().map_err(AppError::from)?;
    tracing::info!("Signed out");
    Ok(())
}

/// Show the signed-in account, falling back to the last known login.
pub fn whoami() -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let registry = AuthRegistry::new(ctx.storage);

    match registry.current_user() {
        Some(account) => tracing::info!("Signed in as {} <{}>", account.name, account.email),
        None => match registry.last_user() {
            Some(account) => {
                tracing::info!("Not signed in (last login: {})", account.email);
            }
            None => tracing::info!("Not signed in"),
        },
    }
    Ok(())
}
